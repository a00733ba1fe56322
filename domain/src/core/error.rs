//! Domain error types

use thiserror::Error;

/// Message shown whenever a query contains characters outside the allow-list.
pub const DISALLOWED_CHARACTERS_MESSAGE: &str =
    "Invalid characters detected. Only letters, numbers, spaces, '/' and '-' are permitted.";

/// Errors raised while validating a case query before dispatch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Enter a case number, CNR, or party name to search")]
    Empty,

    #[error("{}", DISALLOWED_CHARACTERS_MESSAGE)]
    DisallowedCharacters,
}

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),

    #[error("No advocate names configured for the firm")]
    EmptyRoster,

    #[error("Unknown court code: {0} (expected TG or AP)")]
    UnknownCourt(String),
}

impl DomainError {
    /// Check if this error is a validation failure on user input
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::InvalidQuery(_))
    }
}
