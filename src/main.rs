use anyhow::Context;
use tracing::{info, warn};

use meal_prep_relay::{config::RelayConfig, logging, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = RelayConfig::from_env();
    if config.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; chat requests will fail until it is configured");
    }

    let state = AppState::from_config(&config)
        .context("failed to build the OpenAI client")?
        .shared();

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "meal prep relay listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
