use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use snip_core::Store;
use snip_gateway::cli::{Cli, StorageBackendArg};
use snip_gateway::server::{self, shutdown_signal};
use snip_gateway::{App, AppState, HttpMetrics};
use snip_service::AssociationService;
use snip_storage::{InMemoryStore, MySqlStore};
use snip_xid::{SystemClock, XidGenerator};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Cli::parse();

    snip_telemetry::init(config.log_format.into())?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting snip gateway"
    );

    let generator = XidGenerator::new(config.xid_settings());

    match config.storage {
        StorageBackendArg::InMemory => run_server(&config, InMemoryStore::new(), generator).await,
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .context("mysql dsn is required when storage backend is mysql")?;
            let store = MySqlStore::connect(mysql_dsn)
                .await
                .context("failed to connect to mysql")?;
            store
                .ensure_schema()
                .await
                .context("failed to prepare mysql schema")?;
            run_server(&config, store, generator).await
        }
    }
}

async fn run_server<S: Store + Clone>(
    config: &Cli,
    store: S,
    generator: XidGenerator<SystemClock>,
) -> anyhow::Result<()> {
    let service = AssociationService::new(store.clone(), generator);
    let metrics = HttpMetrics::new().context("failed to register metrics")?;
    let state = AppState::new(Arc::new(service), Arc::new(metrics));

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    server::serve(
        listener,
        App::router(state),
        config.shutdown_grace(),
        shutdown_signal(),
    )
    .await
    .context("server error")?;

    store.close().await;
    info!("store closed, shutdown complete");
    Ok(())
}
