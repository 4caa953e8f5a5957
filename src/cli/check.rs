//! Validate filter expressions and expose their parsed form

use super::CliError;
use crate::output::to_json;
use crate::parse;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The filter expression to parse
    pub filter: String,
    /// Emit the parsed tree as JSON instead of a validity message
    pub ast: bool,
    /// Pretty-print the JSON output
    pub pretty: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Parsed tree as JSON
    Ast(serde_json::Value),
}

/// Parse a filter and report validity or its structural JSON form.
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let groups = parse(&options.filter).map_err(CliError::Parse)?;

    if options.ast {
        Ok(CheckResult::Ast(to_json(&groups)))
    } else {
        Ok(CheckResult::SyntaxValid)
    }
}
