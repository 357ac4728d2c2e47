//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    Router,
};
use pterodactyl_whitelist::config::{AppConfig, ListenerConfig, ObservabilityConfig, PanelConfig};
use pterodactyl_whitelist::{HttpServer, PanelClient, Shutdown};
use tokio::net::TcpListener;

pub const API_KEY: &str = "secret";
pub const SERVER_ID: &str = "1";

/// A request received by the stub panel.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Stand-in for the Pterodactyl panel that answers every request with a
/// fixed status and records what it received.
pub struct StubPanel {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubPanel {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    });
    (state.status, "")
}

/// Start a stub panel on an ephemeral port.
pub async fn start_stub_panel(status: u16) -> StubPanel {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status: StatusCode::from_u16(status).unwrap(),
        requests: requests.clone(),
    };

    let app = Router::new().fallback(record).with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubPanel { addr, requests }
}

/// An address nothing is listening on.
pub fn closed_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// A running gateway instance.
pub struct Gateway {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl Gateway {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

impl Drop for Gateway {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the gateway on an ephemeral port, pointed at `panel_url`.
pub async fn start_gateway(panel_url: &str) -> Gateway {
    let config = AppConfig {
        panel: PanelConfig {
            api_url: panel_url.to_string(),
            server_id: SERVER_ID.to_string(),
            api_key: API_KEY.to_string(),
        },
        listener: ListenerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        observability: ObservabilityConfig::default(),
    };

    let panel = PanelClient::with_http_client(&config.panel, client());
    let server = HttpServer::with_panel(config, panel);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    Gateway { addr, shutdown }
}

/// HTTP client that ignores proxy environment variables.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
