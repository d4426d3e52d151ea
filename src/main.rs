use anyhow::{Context, Result};
use cwvstats::api;
use cwvstats::config::AppConfig;
use cwvstats::db::MemoryStore;
use cwvstats::models::AppState;
use cwvstats::utils::init_logging;
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(&config)?;

    let store = MemoryStore::load(&config.data_file)
        .with_context(|| format!("Failed to load samples from {}", config.data_file.display()))?;
    let shared_state = Arc::new(AppState {
        store: Arc::new(store),
        scorer: config.scorer,
    });

    let app = api::router(shared_state);

    info!("🚀 Server running on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
