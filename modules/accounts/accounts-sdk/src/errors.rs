//! Public error types for the accounts module.

use thiserror::Error;

/// Errors that can be returned by the `AccountsApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountsError {
    /// Account with the specified id was not found.
    #[error("Account not found: {id}")]
    NotFound { id: String },

    /// An account with the specified id already exists.
    #[error("Account with id '{id}' already exists")]
    Conflict { id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    /// An internal error occurred.
    #[error("Internal error")]
    Internal,
}

impl AccountsError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn conflict(id: impl Into<String>) -> Self {
        Self::Conflict { id: id.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
