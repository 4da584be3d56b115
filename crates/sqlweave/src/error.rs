//! Error types for sqlweave

use thiserror::Error;

/// Result type alias for sqlweave operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors raised while resolving a statement.
///
/// Composition itself never fails; every error originates in a
/// [`Personality`](crate::Personality) and reaches the `build` caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// A quoting personality refused an identifier
    #[error("Invalid identifier: {0}")]
    InvalidIdent(String),

    /// Failure reported by a caller-defined personality
    #[error("Personality error: {0}")]
    Personality(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl SqlError {
    /// Create an invalid identifier error
    pub fn invalid_ident(message: impl Into<String>) -> Self {
        Self::InvalidIdent(message.into())
    }

    /// Create a personality error
    pub fn personality(message: impl Into<String>) -> Self {
        Self::Personality(message.into())
    }

    /// Check if this is an invalid identifier error
    pub fn is_invalid_ident(&self) -> bool {
        matches!(self, Self::InvalidIdent(_))
    }
}
