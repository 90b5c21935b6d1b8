//! Order desk HTTP server

use anyhow::Result;
use clap::Parser;
use order_desk::config::{AppConfig, StorageBackend};
use order_desk::core::Store;
use order_desk::server::ServerBuilder;
use order_desk::storage::InMemoryStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

/// Command-line arguments for the order desk.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long, env = "ORDER_DESK_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::from_yaml_file(path)?,
        None => AppConfig::default(),
    }
    .with_env_overrides()?;
    config.validate()?;

    let default_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    fmt().with_env_filter(env_filter).with_target(true).init();

    tracing::info!(
        config = ?args.config,
        backend = ?config.storage.backend,
        "starting order desk"
    );

    let store = open_store(&config).await?;

    ServerBuilder::new()
        .with_shared_store(store)
        .serve(&config.bind_address())
        .await
}

async fn open_store(config: &AppConfig) -> Result<Arc<dyn Store>> {
    match config.storage.backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryStore::new())),
        StorageBackend::Postgres => open_postgres(config).await,
    }
}

#[cfg(feature = "postgres")]
async fn open_postgres(config: &AppConfig) -> Result<Arc<dyn Store>> {
    use anyhow::Context;
    use order_desk::storage::PostgresStore;

    let url = config
        .storage
        .database_url
        .as_deref()
        .context("storage.database_url is required for the postgres backend")?;
    let store = PostgresStore::connect(url)
        .await
        .context("failed to connect to postgres")?;
    store.ensure_schema().await?;
    tracing::info!("postgres schema ready");
    Ok(Arc::new(store))
}

#[cfg(not(feature = "postgres"))]
async fn open_postgres(_config: &AppConfig) -> Result<Arc<dyn Store>> {
    anyhow::bail!("the postgres backend requires building with `--features postgres`")
}
