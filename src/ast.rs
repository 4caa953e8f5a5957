//! # Sift Filter Language - Abstract Syntax Tree
//!
//! Data model shared by the scanner and parser:
//!
//! - **[tokens]** - Lexical tokens produced by the scanner
//! - **[operators]** - Join (`&&`/`||`) and comparison operators
//! - **[expressions]** - Parsed expression tree
//!
//! A filter is a flat sequence of [`expressions::ExprGroup`] elements, each
//! tagged with the join operator that combines it with the accumulated
//! result of everything before it:
//!
//! ```text
//! a=1 && (b~"x" || c!=2)
//! ```
//!
//! There is no operator precedence; the sequence folds left to right.

pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::{Expr, ExprGroup, ExprItem};
pub use operators::{JoinOp, SignOp};
pub use tokens::{Token, TokenKind};
