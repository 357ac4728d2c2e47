//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the whitelist handlers
//! - Wire up middleware (request ID, tracing)
//! - Serve on a bound listener until shutdown

use std::sync::Arc;

use axum::{routing::post, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::whitelist::{add_to_whitelist, remove_from_whitelist};
use crate::panel::{PanelClient, PanelResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub panel: Arc<PanelClient>,
}

/// HTTP server for the whitelist gateway.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> PanelResult<Self> {
        let panel = PanelClient::new(&config.panel)?;
        Ok(Self::with_panel(config, panel))
    }

    /// Create a server around an already constructed panel client.
    pub fn with_panel(config: AppConfig, panel: PanelClient) -> Self {
        let state = AppState {
            panel: Arc::new(panel),
        };

        Self {
            router: Self::build_router(state),
            config,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/whitelist", post(add_to_whitelist).delete(remove_from_whitelist))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until a message arrives on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            panel = %self.config.panel.api_url,
            server_id = %self.config.panel.server_id,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
