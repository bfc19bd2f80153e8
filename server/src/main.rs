// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::env;
use std::sync::Arc;

use anyhow::Result;
use server::AppState;
use server::config::ServerConfig;
use server::transport::app_router;
use tbbot::GreetingAgent;
use tokio::net::TcpListener;
use tracing::{info, warn};

mod log;

#[tokio::main]
async fn main() -> Result<()> {
    // A local .env wins over the inherited environment
    let _ = dotenvy::dotenv_override();

    // Load config from custom path if specified
    let config_path = env::var("CONFIG_FILE").ok();
    let config = ServerConfig::load_with_env(config_path.as_deref())?;

    let _guard = log::new(config.log_level)?;

    if let Err(err) = config.validate() {
        warn!("{err} Language model features are unavailable.");
    }

    let addr = config.bind_addr()?;
    let app_state = Arc::new(AppState::new(config, Arc::new(GreetingAgent::new())));
    let app = app_router(app_state);

    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on {addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
