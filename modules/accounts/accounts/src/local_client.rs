use std::sync::Arc;

use accounts_sdk::{Account, AccountUpdate, AccountsApi, AccountsError};
use async_trait::async_trait;

use crate::domain::service::Service;

/// In-process [`AccountsApi`] backed by the domain service.
pub struct AccountsLocalClient {
    service: Arc<Service>,
}

impl AccountsLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AccountsApi for AccountsLocalClient {
    async fn create_account(&self, account: Account) -> Result<Account, AccountsError> {
        self.service
            .create_account(account)
            .await
            .map_err(Into::into)
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, AccountsError> {
        self.service.list_accounts().await.map_err(Into::into)
    }

    async fn get_account(&self, id: &str) -> Result<Account, AccountsError> {
        self.service.get_account(id).await.map_err(Into::into)
    }

    async fn update_account(
        &self,
        id: &str,
        update: AccountUpdate,
    ) -> Result<Account, AccountsError> {
        self.service
            .update_account(id, update)
            .await
            .map_err(Into::into)
    }

    async fn delete_account(&self, id: &str) -> Result<Account, AccountsError> {
        self.service.delete_account(id).await.map_err(Into::into)
    }
}
