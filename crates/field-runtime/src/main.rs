//! # WireField Runtime
//!
//! Entry point for the field gateway service.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging
//! 2. Load configuration (defaults + environment overrides)
//! 3. Start the HTTP gateway
//! 4. Shut down gracefully on Ctrl+C

use anyhow::Result;
use field_gateway::{FieldGatewayService, GatewayConfig};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Load configuration with environment overrides.
fn load_config() -> GatewayConfig {
    let mut config = GatewayConfig::default();

    if let Ok(host) = std::env::var("WF_HTTP_HOST") {
        match host.parse() {
            Ok(h) => config.http.host = h,
            Err(_) => warn!(value = %host, "WF_HTTP_HOST is not a valid IP address"),
        }
    }

    if let Ok(port) = std::env::var("WF_HTTP_PORT") {
        match port.parse() {
            Ok(p) => config.http.port = p,
            Err(_) => warn!(value = %port, "WF_HTTP_PORT is not a valid port"),
        }
    }

    config
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = load_config();
    info!(addr = %config.http_addr(), "Starting WireField gateway");

    let service = FieldGatewayService::new(config)?;

    // Trigger graceful shutdown on Ctrl+C
    let shutdown = service.shutdown_sender();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
            let _ = shutdown.send(true);
        }
    });

    service.start().await?;

    Ok(())
}
