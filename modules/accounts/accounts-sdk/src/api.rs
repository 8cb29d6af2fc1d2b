//! `AccountsApi` trait definition.

use async_trait::async_trait;

use crate::errors::AccountsError;
use crate::models::{Account, AccountUpdate};

/// Public API of the accounts module.
///
/// Every call maps to exactly one store operation. Lookups by id return
/// [`AccountsError::NotFound`] instead of an empty payload.
#[async_trait]
pub trait AccountsApi: Send + Sync {
    /// Insert a new account. Fails with `Conflict` if the id is taken.
    async fn create_account(&self, account: Account) -> Result<Account, AccountsError>;

    /// All stored accounts.
    async fn list_accounts(&self) -> Result<Vec<Account>, AccountsError>;

    async fn get_account(&self, id: &str) -> Result<Account, AccountsError>;

    /// Replace every field except the id.
    async fn update_account(
        &self,
        id: &str,
        update: AccountUpdate,
    ) -> Result<Account, AccountsError>;

    /// Remove the account and return it as it was before deletion.
    async fn delete_account(&self, id: &str) -> Result<Account, AccountsError>;
}
