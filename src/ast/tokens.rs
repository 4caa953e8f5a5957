use std::fmt;

/// Kind of a lexical token.
///
/// Exactly one kind per token; the kind determines how the parser consumes
/// the token's literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A character that starts no recognized token category
    Unexpected,

    /// End of input
    Eof,

    /// Run of whitespace, kept verbatim
    Whitespace,

    /// Join operator (`&&` or `||`)
    Join,

    /// Comparison operator
    ///
    /// # Examples
    /// ```text
    /// =
    /// !=
    /// ?<=
    /// ```
    Sign,

    /// Field name, column name, placeholder, etc.
    ///
    /// # Examples
    /// ```text
    /// title
    /// @request.auth.id
    /// #join:2
    /// ```
    Identifier,

    /// Numeric literal, including negative and fractional forms
    Number,

    /// `'` or `"` quoted string; the literal holds the unescaped content
    Text,

    /// Parenthesized subexpression; the literal holds the inner source with
    /// the outermost parentheses stripped
    Group,
}

impl TokenKind {
    /// Lowercase name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Unexpected => "unexpected",
            TokenKind::Eof => "eof",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Join => "join",
            TokenKind::Sign => "sign",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Text => "text",
            TokenKind::Group => "group",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Smallest lexical unit: a kind plus its literal payload.
///
/// The literal is already unwrapped: quotes are stripped and escapes
/// resolved for text, and the outer parentheses are stripped for groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// End-of-input marker with an empty literal.
    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }
}
