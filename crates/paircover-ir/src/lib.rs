//! Input model for the pairwise generator: parameters, their legal
//! values, and the invalid-combination constraints, plus the text
//! parsers that build them.

pub mod parse;
pub mod types;

pub use parse::{parse_forbidden, parse_parameters, ParseError};
pub use types::{Constraint, ForbiddenCombination, Parameter, Universe};
