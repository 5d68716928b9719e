//! Unified error types for the rental core
//!
//! Validation failures are expected, user-facing errors raised at the point
//! of detection and propagated unhandled to the caller. `Database` is the
//! only infrastructure variant and covers repository failures.

use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - business rule violations plus storage failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PendentRental(String),

    #[error("{0}")]
    MovieInRental(String),

    #[error("{0}")]
    InsufficientAge(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Wire-level kind name, as exposed to the calling layer.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::NotFound(_) => "NotFoundError",
            DomainError::PendentRental(_) => "PendentRentalError",
            DomainError::MovieInRental(_) => "MovieInRentalError",
            DomainError::InsufficientAge(_) => "InsufficientAgeError",
            DomainError::Database(_) => "DatabaseError",
        }
    }

    /// The bare message, without the kind name.
    pub fn message(&self) -> &str {
        match self {
            DomainError::NotFound(msg)
            | DomainError::PendentRental(msg)
            | DomainError::MovieInRental(msg)
            | DomainError::InsufficientAge(msg)
            | DomainError::Database(msg) => msg,
        }
    }
}

/// Error body handed to the calling layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        if let DomainError::Database(msg) = err {
            tracing::error!("Database error: {}", msg);
        }

        ErrorResponse {
            name: err.kind().to_string(),
            message: err.message().to_string(),
        }
    }
}
