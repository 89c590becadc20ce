//! Text parsers for the two input files.
//!
//! Parameter file: one parameter per non-blank, non-`#` line,
//! `name: value1, value2, ...`. Line order is parameter order, token
//! order is value order; both are preserved exactly.
//!
//! Invalid-combination file: one combination per non-blank, non-`#`
//! line, `param1 = value1 & param2 = value2 & ...`, resolved against an
//! already-built [`Universe`].

use crate::types::{Constraint, ForbiddenCombination, Parameter, Universe};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: missing ':' between parameter name and values")]
    MissingSeparator { line: usize },

    #[error("line {line}: empty parameter name")]
    EmptyName { line: usize },

    #[error("line {line}: parameter '{name}' has no values")]
    NoValues { line: usize, name: String },

    #[error("line {line}: missing '=' in constraint term '{term}'")]
    MissingAssignment { line: usize, term: String },

    #[error("line {line}: unknown parameter '{name}'")]
    UnknownParameter { line: usize, name: String },

    #[error("line {line}: parameter '{name}' has no value '{value}'")]
    UnknownValue {
        line: usize,
        name: String,
        value: String,
    },
}

/// Lines that carry content: trimmed, skipping blanks and `#` comments.
/// Yields 1-based line numbers for error reporting.
fn content_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Parse a parameter definition file into a [`Universe`].
pub fn parse_parameters(input: &str) -> Result<Universe, ParseError> {
    let mut parameters = Vec::new();

    for (line_no, line) in content_lines(input) {
        let (name, rest) = line
            .split_once(':')
            .ok_or(ParseError::MissingSeparator { line: line_no })?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseError::EmptyName { line: line_no });
        }

        let values: Vec<String> = rest
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();
        if values.is_empty() {
            return Err(ParseError::NoValues {
                line: line_no,
                name: name.to_string(),
            });
        }

        parameters.push(Parameter {
            name: name.to_string(),
            values,
        });
    }

    Ok(Universe::new(parameters))
}

/// Parse an invalid-combination file against a parsed universe.
///
/// Every term must name a declared parameter and one of its declared
/// values; anything else is a parse error rather than a silently
/// weakened constraint.
pub fn parse_forbidden(
    input: &str,
    universe: &Universe,
) -> Result<Vec<ForbiddenCombination>, ParseError> {
    let mut combinations = Vec::new();

    for (line_no, line) in content_lines(input) {
        let mut terms = Vec::new();
        for term in line.split('&') {
            let (name, value) = term
                .split_once('=')
                .ok_or_else(|| ParseError::MissingAssignment {
                    line: line_no,
                    term: term.trim().to_string(),
                })?;
            let name = name.trim();
            let value = value.trim();

            let parameter =
                universe
                    .parameter_index(name)
                    .ok_or_else(|| ParseError::UnknownParameter {
                        line: line_no,
                        name: name.to_string(),
                    })?;
            let value =
                universe
                    .value_index(parameter, value)
                    .ok_or_else(|| ParseError::UnknownValue {
                        line: line_no,
                        name: name.to_string(),
                        value: value.to_string(),
                    })?;

            terms.push(Constraint { parameter, value });
        }
        combinations.push(ForbiddenCombination { terms });
    }

    Ok(combinations)
}
