mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use config::{Config, StoreBackend};
use state::AppState;
use store::memory::MemoryGameStore;
use store::spanner::SpannerGameStore;
use store::GameStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!("game-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store: Arc<dyn GameStore> = match config.store_backend {
        StoreBackend::Spanner => {
            let spanner_config = config
                .spanner
                .as_ref()
                .context("Spanner backend selected but no Spanner configuration loaded")?;
            Arc::new(SpannerGameStore::from_config(spanner_config).await?)
        }
        StoreBackend::Memory => Arc::new(MemoryGameStore::new()),
    };

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        store,
        config: Arc::new(config),
    };
    let app = routes::router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
