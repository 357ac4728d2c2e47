//! Pterodactyl whitelist gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────┐
//!   POST/DELETE           │            WHITELIST GATEWAY              │
//!   /whitelist?username=  │                                           │
//!   ──────────────────────┼─▶ http::server ─▶ http::whitelist ─┐      │
//!                         │   (request id,     (validate one   │      │
//!                         │    trace)           username)      ▼      │
//!   201 / 204 / 400       │                           panel::client ──┼──▶ Pterodactyl
//!   ◀─────────────────────┼── http::response ◀────────(command POST)  │    client API
//!                         │                                           │
//!                         │   config · observability · lifecycle      │
//!                         └──────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;

use pterodactyl_whitelist::config::{self, ConfigError};
use pterodactyl_whitelist::observability::{logging, metrics};
use pterodactyl_whitelist::{HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("pterodactyl-whitelist v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match config::load_config() {
        Ok(config) => config,
        // Usage errors, --help and --version are printed by clap itself
        Err(ConfigError::Cli(e)) => e.exit(),
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    let bind_address = config.listener.bind_address();

    tracing::info!(
        bind_address = %bind_address,
        panel = %config.panel.api_url,
        server_id = %config.panel.server_id,
        "Configuration loaded"
    );

    if let Some(addr) = config.observability.metrics_address {
        metrics::init_metrics(addr);
    }

    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(address = %bind_address, error = %e, "Failed to bind listener");
            return Err(e.into());
        }
    };

    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        "Listening on {}",
        bind_address
    );

    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
