use accounts_sdk::{Account, AccountUpdate};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr,
    TransactionTrait,
};

use crate::domain::error::DomainError;
use crate::domain::repo::AccountsRepository;

use super::entity::{self, Entity as AccountEntity};
use super::mapper;

/// Rows per INSERT statement in a batch; 13 bound parameters each keeps a
/// statement well under SQLite's variable limit.
const INSERT_CHUNK: usize = 500;

pub struct SeaOrmAccountsRepository {
    db: DatabaseConnection,
}

impl SeaOrmAccountsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: &DbErr) -> DomainError {
    DomainError::database(e.to_string())
}

fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[async_trait]
impl AccountsRepository for SeaOrmAccountsRepository {
    async fn find(&self, id: &str) -> Result<Option<Account>, DomainError> {
        AccountEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(|e| db_err(&e))?
            .map(Account::try_from)
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Account>, DomainError> {
        AccountEntity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_err(&e))?
            .into_iter()
            .map(Account::try_from)
            .collect()
    }

    async fn insert(&self, account: Account) -> Result<Account, DomainError> {
        let am = entity::ActiveModel::from(account.clone());

        AccountEntity::insert(am)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::already_exists(account.id.clone())
                } else {
                    db_err(&e)
                }
            })?;

        Ok(account)
    }

    async fn replace(
        &self,
        id: &str,
        update: AccountUpdate,
    ) -> Result<Option<Account>, DomainError> {
        let txn = self.db.begin().await.map_err(|e| db_err(&e))?;

        // Dropping `txn` without commit rolls it back.
        let Some(existing) = AccountEntity::find_by_id(id.to_owned())
            .one(&txn)
            .await
            .map_err(|e| db_err(&e))?
        else {
            return Ok(None);
        };

        let mut am: entity::ActiveModel = existing.into();
        mapper::apply_update(&mut am, update);
        let model = am.update(&txn).await.map_err(|e| db_err(&e))?;

        txn.commit().await.map_err(|e| db_err(&e))?;
        Account::try_from(model).map(Some)
    }

    async fn remove(&self, id: &str) -> Result<Option<Account>, DomainError> {
        let txn = self.db.begin().await.map_err(|e| db_err(&e))?;

        let Some(existing) = AccountEntity::find_by_id(id.to_owned())
            .one(&txn)
            .await
            .map_err(|e| db_err(&e))?
        else {
            return Ok(None);
        };

        AccountEntity::delete_by_id(id.to_owned())
            .exec(&txn)
            .await
            .map_err(|e| db_err(&e))?;

        txn.commit().await.map_err(|e| db_err(&e))?;
        Account::try_from(existing).map(Some)
    }

    async fn insert_batch(&self, accounts: Vec<Account>) -> Result<u64, DomainError> {
        if accounts.is_empty() {
            return Ok(0);
        }

        let models: Vec<entity::ActiveModel> =
            accounts.into_iter().map(entity::ActiveModel::from).collect();

        let txn = self.db.begin().await.map_err(|e| db_err(&e))?;
        let mut inserted = 0;
        for chunk in models.chunks(INSERT_CHUNK) {
            inserted += AccountEntity::insert_many(chunk.to_vec())
                .exec_without_returning(&txn)
                .await
                .map_err(|e| {
                    if is_unique_violation(&e) {
                        DomainError::database(format!("batch rejected, duplicate id: {e}"))
                    } else {
                        db_err(&e)
                    }
                })?;
        }
        txn.commit().await.map_err(|e| db_err(&e))?;

        tracing::debug!(inserted, "Batch insert committed");
        Ok(inserted)
    }
}
