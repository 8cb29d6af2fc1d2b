use accounts_sdk::AccountsError;
use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Account not found: {id}")]
    NotFound { id: String },

    #[error("Account with id '{id}' already exists")]
    AlreadyExists { id: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for AccountsError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::NotFound { id } => AccountsError::not_found(id),
            DomainError::AlreadyExists { id } => AccountsError::conflict(id),
            DomainError::Validation { field, message } => {
                AccountsError::validation(format!("{field}: {message}"))
            }
            DomainError::Database { .. } => AccountsError::internal(),
        }
    }
}
