//! Cost Engine HTTP server.

use std::env;

use cost_engine::api::{AppState, create_router};
use cost_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_dir = env::var("COST_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = env::var("COST_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        employees = config.employees().len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, version = env!("CARGO_PKG_VERSION"), "Cost engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
