//! Domain Layer - Errors
//!
//! A single error type covers every way a remote call can fail.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// Configuration or request input rejected before anything was sent
    InvalidInput(String),
    /// The request never produced a response (network, CORS, DNS...)
    Transport(String),
    /// The remote table answered with a non-success status
    Remote { status: u16, message: String },
    /// The response body did not have the expected shape
    Decode(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Transport(msg) => write!(f, "Transport error: {}", msg),
            DomainError::Remote { status, message } => write!(f, "Remote error ({}): {}", status, message),
            DomainError::Decode(msg) => write!(f, "Decode error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display_includes_status() {
        let err = DomainError::Remote { status: 409, message: "duplicate key".to_string() };
        assert_eq!(err.to_string(), "Remote error (409): duplicate key");
    }
}
