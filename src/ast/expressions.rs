use crate::ast::{JoinOp, SignOp, Token};

/// One atomic comparison: `left op right`.
///
/// Both operands are restricted by the parser to identifier, text, or
/// number tokens.
///
/// # Example
/// ```text
/// title ~ "lorem"
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub left: Token,
    pub op: SignOp,
    pub right: Token,
}

/// Payload of an [`ExprGroup`]: either a leaf comparison or a parenthesized
/// subexpression parsed into its own sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprItem {
    /// A single comparison
    Expr(Expr),
    /// A nested, ordered sequence of groups
    Group(Vec<ExprGroup>),
}

/// One element of a parsed filter sequence.
///
/// `join` states how this element combines with the accumulated result of
/// all prior elements. The first element of a sequence always carries
/// [`JoinOp::And`]; there is no join token before it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprGroup {
    pub join: JoinOp,
    pub item: ExprItem,
}
