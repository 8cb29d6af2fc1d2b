use accounts_sdk::{Account, AccountUpdate};
use async_trait::async_trait;

use crate::domain::error::DomainError;

/// Persistence port for accounts.
///
/// Lookups return `Ok(None)` when the id is absent; callers decide how a
/// miss is reported. Each method is a single logical store operation.
#[async_trait]
pub trait AccountsRepository: Send + Sync {
    async fn find(&self, id: &str) -> Result<Option<Account>, DomainError>;

    /// All rows, ordered by id.
    async fn list(&self) -> Result<Vec<Account>, DomainError>;

    /// Insert a new row. A taken id yields `DomainError::AlreadyExists`.
    async fn insert(&self, account: Account) -> Result<Account, DomainError>;

    /// Overwrite every column except the id in one transaction.
    async fn replace(
        &self,
        id: &str,
        update: AccountUpdate,
    ) -> Result<Option<Account>, DomainError>;

    /// Delete the row and return the snapshot taken inside the same transaction.
    async fn remove(&self, id: &str) -> Result<Option<Account>, DomainError>;

    /// Insert all rows atomically. Nothing is written if any row fails.
    async fn insert_batch(&self, accounts: Vec<Account>) -> Result<u64, DomainError>;
}
