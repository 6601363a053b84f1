//! # Timezone Time Service Main Entry Point
//!
//! Initializes logging, loads configuration, and serves the HTTP API for
//! timezone-aware time queries and date arithmetic.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod services;
mod utils;

use crate::api::ApiService;
use crate::config::Config;
use crate::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tz_time_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting timezone time service v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Server zone: {}, HTTP Port: {}",
        config.server_tz, config.http_port
    );

    let api = ApiService::new(&config);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    log_system_event(
        "server started",
        Some(&format!("listening on port {}", config.http_port)),
    );
    axum::serve(listener, api.router).await?;

    info!("Application stopped");
    Ok(())
}
