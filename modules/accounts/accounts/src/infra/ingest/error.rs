use std::path::PathBuf;

use sea_orm::DbErr;
use thiserror::Error;

use crate::domain::error::DomainError;

/// Loader failures. Any of these aborts the whole load.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: malformed JSON: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: expected a JSON object")]
    NotAnObject { line: usize },

    #[error("line {line}: missing key '{field}'")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: credit value {value} is not an integer")]
    InvalidCredit { line: usize, value: String },

    #[error("line {line}: field '{field}' {message}")]
    InvalidField {
        line: usize,
        field: &'static str,
        message: String,
    },

    #[error("failed to prepare the accounts table: {0}")]
    Migration(#[source] DbErr),

    #[error("failed to store accounts: {0}")]
    Storage(#[from] DomainError),
}

impl IngestError {
    /// 1-based input line the error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Malformed { line, .. }
            | Self::NotAnObject { line }
            | Self::MissingField { line, .. }
            | Self::InvalidCredit { line, .. }
            | Self::InvalidField { line, .. } => Some(*line),
            Self::Io { .. } | Self::Migration(_) | Self::Storage(_) => None,
        }
    }
}
