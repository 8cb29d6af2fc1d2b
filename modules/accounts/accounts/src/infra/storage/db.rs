use std::path::Path;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::config::DatabaseConfig;
use crate::infra::storage::migrations::Migrator;

/// Open the connection pool for the accounts store.
///
/// The pool is created once per process and handed to request handlers; each
/// request borrows a connection for its own duration.
///
/// # Errors
/// Returns an error if the DSN is invalid or the store cannot be opened.
pub async fn connect(cfg: &DatabaseConfig, home_dir: &Path) -> Result<DatabaseConnection, DbErr> {
    let dsn = cfg.resolve_dsn(home_dir);
    let mut opts = ConnectOptions::new(dsn);
    opts.acquire_timeout(cfg.acquire_timeout).sqlx_logging(false);

    if cfg.is_in_memory() {
        // Every SQLite connection sees its own private in-memory database,
        // so the pool must hold exactly one connection that never expires.
        opts.max_connections(1)
            .min_connections(1)
            .idle_timeout(Duration::from_secs(u64::from(u32::MAX)))
            .max_lifetime(Duration::from_secs(u64::from(u32::MAX)));
    } else {
        opts.max_connections(cfg.max_conns.max(1))
            .min_connections(cfg.min_conns.min(cfg.max_conns));
    }

    tracing::debug!(in_memory = cfg.is_in_memory(), "Opening accounts store");
    Database::connect(opts).await
}

/// Create the `accounts` table if it does not exist yet.
///
/// # Errors
/// Returns an error if a migration fails.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}

/// Connect and ensure the schema is present.
///
/// # Errors
/// Returns an error if connecting or migrating fails.
pub async fn open(cfg: &DatabaseConfig, home_dir: &Path) -> Result<DatabaseConnection, DbErr> {
    let db = connect(cfg, home_dir).await?;
    migrate(&db).await?;
    Ok(db)
}
