//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

use crate::notification::Notification;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Password-related errors
    #[error("Password error: {0}")]
    Password(String),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Entity already exists (conflict)
    #[error("{0} already exists")]
    Conflict(String),

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a password error
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }

    /// Create a conflict error
    pub fn conflict(entity: impl Into<String>) -> Self {
        DomainError::Conflict(entity.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Reason an account could not be created.
///
/// A rejection is an expected outcome of registration, not a fault: it is
/// returned as a value and reported to the user as a notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Another account already holds the username
    #[error("User Name '{0}' is not available")]
    UsernameUnavailable(String),

    /// The store refused or failed the write; carries a user-facing message
    #[error("{0}")]
    Persistence(String),
}

impl Rejection {
    /// Create a persistence rejection from a user-facing message
    pub fn persistence(msg: impl Into<String>) -> Self {
        Rejection::Persistence(msg.into())
    }

    /// Notification reported to the user for this rejection.
    ///
    /// A taken username is an error; a store failure is reported at info level.
    pub fn notification(&self) -> Notification {
        match self {
            Rejection::UsernameUnavailable(_) => Notification::error(Some(self.to_string()), None),
            Rejection::Persistence(msg) => Notification::info(Some(msg.clone()), None),
        }
    }
}
