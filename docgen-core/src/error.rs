//! Error types for docgen-core.

use thiserror::Error;

use crate::types::Field;

/// First rule a row broke. `line` is the 1-indexed data-row position
/// (the first row after the header is line 1).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text column is empty.
    #[error("{field} not provided at line {line}")]
    Missing { field: Field, line: usize },

    /// The date column is not a `d/m/yyyy` calendar date.
    #[error("invalid date at line {line}: expected d/m/yyyy, got '{value}'")]
    InvalidDate { line: usize, value: String },
}

impl ValidationError {
    /// The offending column.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing { field, .. } => *field,
            ValidationError::InvalidDate { .. } => Field::Date,
        }
    }

    /// 1-indexed data-row position of the offending row.
    pub fn line(&self) -> usize {
        match self {
            ValidationError::Missing { line, .. } | ValidationError::InvalidDate { line, .. } => {
                *line
            }
        }
    }
}
