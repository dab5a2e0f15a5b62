use anyhow::Context;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod extract;
mod guidance;
mod llm_client;
mod models;
mod prompt_builder;
mod server;
mod topic;

use config::Config;
use llm_client::LlmClient;
use server::AppState;

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
        if let Some(loc) = info.location() {
            eprintln!("at: {}:{}", loc.file(), loc.line());
        }
    }));
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", e);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    install_panic_hook();

    // A missing credential stops the process before anything binds.
    let config = Config::load().map_err(|e| {
        error!("Configuration error: {}", e);
        e
    })?;
    info!(
        "Using {} model {} (timeout {}s)",
        config.llm.provider, config.llm.model, config.llm.timeout_s
    );

    let generator = Arc::new(LlmClient::new(config.llm.clone())?);
    let state = Arc::new(AppState::new(generator)?);
    let app = server::router(state, &config.allowed_origin)?;

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;
    info!("Listening on http://{}", listener.local_addr()?);
    info!("Accepting browser calls from {}", config.allowed_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}
