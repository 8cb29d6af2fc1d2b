use std::sync::Arc;

use accounts_sdk::{Account, AccountUpdate};
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::repo::AccountsRepository;

/// Domain service for account CRUD.
///
/// Holds the storage handle it was constructed with; there is no process-wide
/// connection. Every method performs exactly one repository call.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn AccountsRepository>,
}

impl Service {
    #[must_use]
    pub fn new(repo: Arc<dyn AccountsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, account), fields(account_id = %account.id))]
    pub async fn create_account(&self, account: Account) -> Result<Account, DomainError> {
        info!("Creating account");
        let created = self.repo.insert(account).await?;
        info!("Successfully created account");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn list_accounts(&self) -> Result<Vec<Account>, DomainError> {
        debug!("Listing accounts");
        let accounts = self.repo.list().await?;
        debug!("Listed {} accounts", accounts.len());
        Ok(accounts)
    }

    #[instrument(skip(self), fields(account_id = %id))]
    pub async fn get_account(&self, id: &str) -> Result<Account, DomainError> {
        debug!("Getting account by id");
        match self.repo.find(id).await? {
            Some(account) => Ok(account),
            None => {
                debug!("Account not found");
                Err(DomainError::not_found(id))
            }
        }
    }

    #[instrument(skip(self, update), fields(account_id = %id))]
    pub async fn update_account(
        &self,
        id: &str,
        update: AccountUpdate,
    ) -> Result<Account, DomainError> {
        info!("Updating account");
        let updated = self
            .repo
            .replace(id, update)
            .await?
            .ok_or_else(|| DomainError::not_found(id))?;
        info!("Successfully updated account");
        Ok(updated)
    }

    #[instrument(skip(self), fields(account_id = %id))]
    pub async fn delete_account(&self, id: &str) -> Result<Account, DomainError> {
        info!("Deleting account");
        let removed = self
            .repo
            .remove(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id))?;
        info!("Successfully deleted account");
        Ok(removed)
    }
}
