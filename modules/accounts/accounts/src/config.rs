use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// File name of the store when no DSN is configured.
pub const DEFAULT_DB_FILE: &str = "accounts.db";

/// DSN of a private in-memory store.
pub const MEMORY_DSN: &str = "sqlite::memory:";

/// Connection settings for the accounts store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Full connection string. When unset the store lives at
    /// `<home_dir>/accounts.db`.
    pub dsn: Option<String>,

    /// Upper bound on pooled connections.
    pub max_conns: u32,

    /// Connections kept open while idle.
    pub min_conns: u32,

    /// How long a request waits for a pooled connection.
    #[serde(with = "humantime_serde")]
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            max_conns: 10,
            min_conns: 1,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl DatabaseConfig {
    /// In-memory store, used by `--mock` and tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            dsn: Some(MEMORY_DSN.to_owned()),
            ..Self::default()
        }
    }

    /// The configured DSN, or the well-known file under `home_dir`.
    #[must_use]
    pub fn resolve_dsn(&self, home_dir: &Path) -> String {
        match &self.dsn {
            Some(dsn) => dsn.clone(),
            None => format!(
                "sqlite://{}?mode=rwc",
                home_dir.join(DEFAULT_DB_FILE).display()
            ),
        }
    }

    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.dsn
            .as_deref()
            .is_some_and(|dsn| dsn.contains(":memory:") || dsn.contains("mode=memory"))
    }
}
