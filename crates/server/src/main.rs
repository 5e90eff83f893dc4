//! socialgraph server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use socialgraph_api::{AppState, middleware::layered, router as api_router};
use socialgraph_common::{Config, config::StorageBackend};
use socialgraph_core::{GraphPolicy, MemoryRelationStore, RelationStoreRef};
use socialgraph_db::DbRelationStore;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

/// Open the configured relation store, migrating the database if needed.
async fn open_store(config: &Config) -> anyhow::Result<RelationStoreRef> {
    match config.storage.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory relation store; relations are lost on restart");
            Ok(Arc::new(MemoryRelationStore::new()))
        }
        StorageBackend::Postgres => {
            let db = socialgraph_db::init(config.database()?)
                .await
                .context("failed to connect to database")?;
            info!("Connected to database");

            info!("Running database migrations...");
            socialgraph_db::migrate(&db)
                .await
                .context("failed to run migrations")?;
            info!("Migrations completed");

            Ok(Arc::new(DbRelationStore::new(Arc::new(db))))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "socialgraph=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting socialgraph server...");

    let config = Config::load().context("failed to load configuration")?;

    let store = open_store(&config).await?;
    let state = AppState::new(store, GraphPolicy::from(config.graph));
    let app = layered(api_router().with_state(state));

    let ip = config
        .server
        .host
        .parse()
        .with_context(|| format!("invalid server host: {}", config.server.host))?;
    let addr = SocketAddr::new(ip, config.server.port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
