//! # sedesd — sedes daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Select the store: `SQLite` (pool + migrations) or in-memory
//! - Construct the application service, injecting the store via port traits
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use sedes_adapter_http_axum::headers::AlertHeaders;
use sedes_adapter_http_axum::router;
use sedes_adapter_http_axum::state::AppState;
use sedes_adapter_storage_sqlite_sqlx::SqliteSedeRepository;
use sedes_app::memory_store::InMemorySedeRepository;
use sedes_app::services::sede_service::SedeService;

use crate::config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_logging(&config.logging.filter);

    let alerts = AlertHeaders::new(config.application.name.as_str())
        .context("application name is not usable in header names")?;

    let app = match config.storage.backend {
        StorageBackend::Sqlite => {
            let db = sedes_adapter_storage_sqlite_sqlx::Config {
                database_url: config.database_url().to_string(),
            }
            .build()
            .await
            .with_context(|| format!("failed to open database {}", config.database_url()))?;
            tracing::info!(url = config.database_url(), "using SQLite storage");

            let repo = SqliteSedeRepository::new(db.pool().clone());
            router::build(AppState::new(SedeService::new(repo), alerts))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage, records are lost on exit");
            let repo = InMemorySedeRepository::new();
            router::build(AppState::new(SedeService::new(repo), alerts))
        }
    };

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "sedesd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server shutdown complete");
    Ok(())
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve on Ctrl-C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl-C");
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
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl-C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
