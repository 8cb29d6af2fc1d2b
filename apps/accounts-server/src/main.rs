mod config;
mod logging;
mod server;
mod shutdown;

use std::path::PathBuf;

use accounts::infra::{ingest, storage};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::config::{AppConfig, CliOverrides};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Accounts Server - JSONL loader and REST API over the accounts store
#[derive(Parser)]
#[command(name = "accounts-server")]
#[command(about = "Accounts Server - JSONL loader and REST API over the accounts store")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite store
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
    /// Load a JSONL file of accounts into the store
    Load {
        /// Source file (defaults to `ingest.source`)
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) defaults -> 2) YAML -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
        mock: cli.mock,
    });

    if cli.print_config {
        println!("{}", config.to_pretty_json()?);
        return Ok(());
    }

    logging::init(&config.logging)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            config.ensure_home_dir()?;
            tracing::info!("Accounts server starting");
            server::run(config).await
        }
        Commands::Check => check_config(&config),
        Commands::Load { file } => {
            config.ensure_home_dir()?;
            load_file(&config, file).await
        }
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_pretty_json()?);
    Ok(())
}

async fn load_file(config: &AppConfig, file: Option<PathBuf>) -> Result<()> {
    let path = file.unwrap_or_else(|| config.ingest.source.clone());
    tracing::info!(path = %path.display(), "Loading accounts");

    let db = storage::connect(&config.database, &config.server.home_dir)
        .await
        .context("failed to open the accounts store")?;

    let report = ingest::ingest_file(&db, &path)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Load failed"))
        .with_context(|| format!("failed to load {}", path.display()))?;

    db.close().await.context("failed to close the accounts store")?;
    println!("Loaded {} accounts", report.inserted);
    Ok(())
}
