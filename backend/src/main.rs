use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use growth_diary_backend::{create_router, initialize_backend, GrowthDiaryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = GrowthDiaryConfig::load()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app_state = initialize_backend(&config);
    let app = create_router(app_state, &config.cors_origin)?;

    let addr = config.socket_addr()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
