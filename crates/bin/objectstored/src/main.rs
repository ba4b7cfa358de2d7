//! # objectstored — objectstore daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise `tracing` from the configured filter
//! - Construct the selected collection store (JSON file or `SQLite`)
//! - Construct the application service, injecting the store via the port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use objectstore_adapter_http_axum::state::AppState;
use objectstore_adapter_storage_json_file::JsonFileStore;
use objectstore_adapter_storage_sqlite_sqlx::SqliteCollectionStore;
use objectstore_app::ports::CollectionStore;
use objectstore_app::services::object_service::ObjectService;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    match config.storage.backend {
        StorageBackend::File => {
            tracing::info!(path = %config.storage.data_file.display(), "using JSON file storage");
            let store = JsonFileStore::new(config.storage.data_file.clone());
            serve(&config, store).await
        }
        StorageBackend::Sqlite => {
            tracing::info!(url = %config.storage.database_url, "using SQLite storage");
            let db = objectstore_adapter_storage_sqlite_sqlx::Config {
                database_url: config.storage.database_url.clone(),
            }
            .build()
            .await?;
            let store = SqliteCollectionStore::new(db.pool().clone());
            serve(&config, store).await
        }
    }
}

async fn serve<S>(config: &Config, store: S) -> Result<(), Box<dyn std::error::Error>>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let state = AppState::new(ObjectService::new(store));
    let app = objectstore_adapter_http_axum::router::build(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "objectstored listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("objectstored stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
