//! Serialization of parsed filters.
//!
//! Two views of a parse result:
//!
//! - **Canonical source** via [`to_source()`] - single-spaced filter syntax
//!   that re-parses to a structurally identical tree
//! - **JSON** via [`to_json()`] - structural representation for tooling
//!
//! Text operands are rendered double-quoted with embedded double quotes
//! backslash-escaped, mirroring how the scanner resolves escapes.

use crate::ast::{Expr, ExprGroup, ExprItem, Token, TokenKind};

/// Renders a parse result back to canonical filter syntax.
///
/// Elements are joined by their join operators; the first element's
/// implicit `&&` is not printed. Whitespace is normalized to single spaces.
///
/// # Examples
///
/// ```
/// use sift_lang::output::to_source;
/// use sift_lang::parse;
///
/// let groups = parse("a=1   &&(b~'x'||c!=2)").unwrap();
/// assert_eq!(to_source(&groups), r#"a = 1 && (b ~ "x" || c != 2)"#);
/// ```
pub fn to_source(groups: &[ExprGroup]) -> String {
    let mut out = String::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(group.join.as_str());
            out.push(' ');
        }

        match &group.item {
            ExprItem::Expr(expr) => {
                out.push_str(&render_operand(&expr.left));
                out.push(' ');
                out.push_str(expr.op.as_str());
                out.push(' ');
                out.push_str(&render_operand(&expr.right));
            }
            ExprItem::Group(inner) => {
                out.push('(');
                out.push_str(&to_source(inner));
                out.push(')');
            }
        }
    }

    out
}

/// Renders a parse result as a JSON array, one object per group.
///
/// # Examples
///
/// ```
/// use sift_lang::output::to_json;
/// use sift_lang::parse;
///
/// let groups = parse("a=1").unwrap();
/// let json = to_json(&groups);
/// assert_eq!(json[0]["join"], "&&");
/// assert_eq!(json[0]["expr"]["left"]["literal"], "a");
/// assert_eq!(json[0]["expr"]["op"], "=");
/// ```
pub fn to_json(groups: &[ExprGroup]) -> serde_json::Value {
    serde_json::Value::Array(groups.iter().map(group_to_json).collect())
}

fn group_to_json(group: &ExprGroup) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("join".into(), group.join.as_str().into());

    match &group.item {
        ExprItem::Expr(expr) => {
            obj.insert("expr".into(), expr_to_json(expr));
        }
        ExprItem::Group(inner) => {
            obj.insert("group".into(), to_json(inner));
        }
    }

    serde_json::Value::Object(obj)
}

fn expr_to_json(expr: &Expr) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("left".into(), token_to_json(&expr.left));
    obj.insert("op".into(), expr.op.as_str().into());
    obj.insert("right".into(), token_to_json(&expr.right));
    serde_json::Value::Object(obj)
}

fn token_to_json(token: &Token) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("kind".into(), token.kind.as_str().into());
    obj.insert("literal".into(), token.literal.clone().into());
    serde_json::Value::Object(obj)
}

fn render_operand(token: &Token) -> String {
    match token.kind {
        TokenKind::Text => quote_text(&token.literal),
        _ => token.literal.clone(),
    }
}

// Backslash is not an escape character in text literals, so only the quote
// itself needs escaping.
fn quote_text(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len() + 2);
    out.push('"');
    for ch in literal.chars() {
        if ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}
