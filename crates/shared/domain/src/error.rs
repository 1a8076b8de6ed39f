//! Domain error taxonomy.
//!
//! Every business-layer and storage-layer failure is classified into one of
//! these four kinds before it crosses a transport boundary. The enum is
//! closed: the status-code mappings in `common` match exhaustively, so a new
//! kind cannot reach the wire without an explicit decision at each boundary.

use thiserror::Error;

use crate::constants::ERR_UNEXPECTED;

/// The four domain error kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Missing or malformed input
    #[error("{0}")]
    InvalidArgument(String),

    /// Entity absent
    #[error("user not found")]
    NotFound,

    /// Credential mismatch
    #[error("{0}")]
    PermissionDenied(String),

    /// Anything unclassified
    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        DomainError::InvalidArgument(msg.into())
    }

    /// Create a permission-denied error
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        DomainError::PermissionDenied(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }

    /// Message as rendered to callers.
    ///
    /// Internal detail never leaves the process: callers see a generic
    /// message while the boundary that classified the error logs the rest.
    pub fn public_message(&self) -> String {
        match self {
            DomainError::Internal(_) => ERR_UNEXPECTED.to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
