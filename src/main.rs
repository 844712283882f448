//! Fatigue engine HTTP server.
//!
//! # Environment Variables
//!
//! - `FATIGUE_ENGINE_ADDR`: bind address (default: 0.0.0.0:3000)
//! - `FATIGUE_ENGINE_CONFIG`: directory holding `limits.yaml` and
//!   `fatigue.yaml` (default: built-in limits)
//! - `RUST_LOG`: log filter (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use fatigue_engine::api::{AppState, create_router};
use fatigue_engine::config::ConfigLoader;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let loader = match env::var("FATIGUE_ENGINE_CONFIG") {
        Ok(dir) => {
            info!(config_dir = %dir, "Loading configuration");
            ConfigLoader::load(&dir)?
        }
        Err(_) => {
            info!("FATIGUE_ENGINE_CONFIG not set, using built-in limits");
            ConfigLoader::default()
        }
    };

    let app = create_router(AppState::from_loader(loader));

    let addr: SocketAddr = env::var("FATIGUE_ENGINE_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
