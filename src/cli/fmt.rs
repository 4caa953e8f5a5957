//! Canonical reformatting of filter expressions

use super::CliError;
use crate::output::to_source;
use crate::parse;

/// Parse a filter and render it back in canonical form.
pub fn execute_fmt(filter: &str) -> Result<String, CliError> {
    let groups = parse(filter).map_err(CliError::Parse)?;
    Ok(to_source(&groups))
}
