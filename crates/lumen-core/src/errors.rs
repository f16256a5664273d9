//! Cross-cutting error types for Lumen.
//!
//! The filter pipeline itself never fails. These errors cover the edges:
//! catalog construction, entity lookup, and parsing of user-supplied tokens.

use thiserror::Error;

/// Errors that can be raised by any Lumen crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A selector token did not name any variant of its enum.
    #[error("Invalid {kind} '{value}' (expected one of: {expected})")]
    InvalidToken {
        kind: &'static str,
        value: String,
        expected: String,
    },

    /// A publication date could not be parsed or is out of range.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Data failed validation (duplicate ids, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
