use crate::ast::{Expr, ExprGroup, ExprItem, JoinOp, SignOp, Token, TokenKind};
use crate::scanner::{ScanError, Scanner};

/// Maximum group nesting accepted before a parse is rejected outright.
/// Keeps adversarial inputs like `((((…))))` from exhausting the stack.
pub const MAX_GROUP_DEPTH: usize = 32;

/// Errors produced while parsing a token stream into expression groups.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Tokenization failure
    Scan(ScanError),

    /// Wrong token where a left operand was expected
    ExpectedLeftOperand { found: TokenKind },

    /// Wrong token where a comparison operator was expected
    ExpectedSign { found: TokenKind },

    /// Wrong token where a right operand was expected
    ExpectedRightOperand { found: TokenKind },

    /// Wrong token where a join operator was expected
    ExpectedJoin { found: TokenKind },

    /// A comparison completed with one of its parts missing
    IncompleteExpr,

    /// Input ended in the middle of an expression
    UnexpectedEof,

    /// Group nesting exceeded [`MAX_GROUP_DEPTH`]
    NestingTooDeep { limit: usize },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Scan(e) => write!(f, "{}", e),
            ParseError::ExpectedLeftOperand { found } => {
                write!(
                    f,
                    "Expected left operand (identifier, text or number) but got {}",
                    found
                )
            }
            ParseError::ExpectedSign { found } => write!(f, "Expected sign but got {}", found),
            ParseError::ExpectedRightOperand { found } => {
                write!(
                    f,
                    "Expected right operand (identifier, text or number) but got {}",
                    found
                )
            }
            ParseError::ExpectedJoin { found } => write!(f, "Expected join but got {}", found),
            ParseError::IncompleteExpr => {
                write!(f, "Invalid expression, missing one of the operands")
            }
            ParseError::UnexpectedEof => write!(f, "Unexpected end of input"),
            ParseError::NestingTooDeep { limit } => {
                write!(f, "Group nesting exceeds {} levels", limit)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Scan(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ScanError> for ParseError {
    fn from(e: ScanError) -> Self {
        ParseError::Scan(e)
    }
}

/// Parser state: which token class completes the current position.
enum Step {
    BeforeSign,
    Sign,
    AfterSign,
    Join,
}

/// Parses a filter string into an ordered sequence of expression groups.
///
/// Each group's `join` states how it combines with the accumulated result
/// of all prior groups; the sequence folds left to right with no operator
/// precedence. Group literals are parsed recursively, so the result nests
/// to the same depth as the input's parentheses.
///
/// Fails on the first grammar violation; there are no partial results.
pub fn parse(text: &str) -> Result<Vec<ExprGroup>, ParseError> {
    parse_at_depth(text, 0)
}

fn parse_at_depth(text: &str, depth: usize) -> Result<Vec<ExprGroup>, ParseError> {
    if depth > MAX_GROUP_DEPTH {
        return Err(ParseError::NestingTooDeep {
            limit: MAX_GROUP_DEPTH,
        });
    }

    let mut res: Vec<ExprGroup> = Vec::new();
    let mut scanner = Scanner::new(text);

    let mut step = Step::BeforeSign;
    let mut join = JoinOp::And;

    let mut left: Option<Token> = None;
    let mut op: Option<SignOp> = None;

    loop {
        let token = scanner.scan()?;

        if token.kind == TokenKind::Eof {
            break;
        }

        if token.kind == TokenKind::Whitespace {
            continue;
        }

        // A group opens a new element, so it is only legal where a left
        // operand may begin; elsewhere it falls through to the state match
        // below and is reported like any other wrong-kind token.
        if token.kind == TokenKind::Group && matches!(step, Step::BeforeSign) {
            let group = parse_at_depth(&token.literal, depth + 1)?;

            if !group.is_empty() {
                res.push(ExprGroup {
                    join,
                    item: ExprItem::Group(group),
                });
            }
            step = Step::Join;
            continue;
        }

        match step {
            Step::BeforeSign => {
                if !is_operand(token.kind) {
                    return Err(ParseError::ExpectedLeftOperand { found: token.kind });
                }
                left = Some(token);
                step = Step::Sign;
            }
            Step::Sign => {
                if token.kind != TokenKind::Sign {
                    return Err(ParseError::ExpectedSign { found: token.kind });
                }
                let Some(sign) = SignOp::from_literal(&token.literal) else {
                    return Err(ParseError::ExpectedSign { found: token.kind });
                };
                op = Some(sign);
                step = Step::AfterSign;
            }
            Step::AfterSign => {
                if !is_operand(token.kind) {
                    return Err(ParseError::ExpectedRightOperand { found: token.kind });
                }
                let (Some(l), Some(o)) = (left.take(), op.take()) else {
                    return Err(ParseError::IncompleteExpr);
                };
                res.push(ExprGroup {
                    join,
                    item: ExprItem::Expr(Expr {
                        left: l,
                        op: o,
                        right: token,
                    }),
                });
                step = Step::Join;
            }
            Step::Join => {
                if token.kind != TokenKind::Join {
                    return Err(ParseError::ExpectedJoin { found: token.kind });
                }
                // `||` selects Or; any other accepted join literal folds to
                // And, matching the first element's default.
                join = if token.literal == "||" {
                    JoinOp::Or
                } else {
                    JoinOp::And
                };
                step = Step::BeforeSign;
            }
        }
    }

    if !matches!(step, Step::Join) {
        return Err(ParseError::UnexpectedEof);
    }

    Ok(res)
}

fn is_operand(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier | TokenKind::Text | TokenKind::Number
    )
}
