use std::sync::Arc;

use anyhow::Context;
use posts_api::auth::JwtIdentity;
use posts_api::config::StoreBackend;
use posts_api::database::{MemoryStore, PostgresStore};
use posts_api::{app, cors_layer, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = posts_api::config::config();
    tracing::info!("Starting Posts API in {:?} mode", config.environment);

    let identity = JwtIdentity::new(config.security.jwt_secret.clone())
        .context("JWT_SECRET must be set")?;

    let state = match config.server.store {
        StoreBackend::Postgres => {
            let store = PostgresStore::connect(&config.database).await?;
            store.migrate().await?;
            let store = Arc::new(store);
            AppState::new(store.clone(), store, Arc::new(identity))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            let store = Arc::new(MemoryStore::new());
            AppState::new(store.clone(), store, Arc::new(identity))
        }
    };

    let app = app(state, cors_layer(&config.security));

    let bind_addr = format!("{}:{}", config.server.bind_addr, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Posts API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
