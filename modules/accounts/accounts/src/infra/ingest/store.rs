use std::path::Path;

use accounts_sdk::Account;
use sea_orm::DatabaseConnection;

use super::error::IngestError;
use super::record::load;
use crate::domain::repo::AccountsRepository;
use crate::infra::storage::{SeaOrmAccountsRepository, migrate};

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: u64,
}

/// Ensure the `accounts` table exists, then insert every record in one
/// transaction.
///
/// # Errors
/// Returns an error if the schema cannot be created or any row is rejected.
/// On a rejected row nothing from `records` is persisted.
pub async fn create_store(
    db: &DatabaseConnection,
    records: Vec<Account>,
) -> Result<LoadReport, IngestError> {
    migrate(db).await.map_err(IngestError::Migration)?;

    let total = records.len();
    let repo = SeaOrmAccountsRepository::new(db.clone());
    let inserted = repo.insert_batch(records).await.inspect_err(|e| {
        tracing::error!(error = %e, records = total, "Batch insert rolled back");
    })?;

    tracing::info!(inserted, "Accounts stored");
    Ok(LoadReport { inserted })
}

/// [`load`] followed by [`create_store`].
///
/// # Errors
/// See [`load`] and [`create_store`].
pub async fn ingest_file(db: &DatabaseConnection, path: &Path) -> Result<LoadReport, IngestError> {
    let records = load(path)?;
    create_store(db, records).await
}
