//! Pterodactyl client API wrapper.
//!
//! # Responsibilities
//! - Build the server command endpoint from configuration
//! - Send authenticated whitelist commands
//! - Classify the outcome (transport failure vs. completed round-trip)
//!
//! # Design Decisions
//! - One pooled `reqwest::Client`, cloned into every handler
//! - Any completed round-trip counts as success; 412 and other non-2xx
//!   statuses are only logged
//! - No timeout: the call waits for the panel or a transport error

use std::time::Instant;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;

use crate::config::PanelConfig;
use crate::observability::metrics;
use crate::panel::types::{PanelError, PanelResult, WhitelistAction, WhitelistCommand};

/// Media type the Pterodactyl client API expects in `Accept`.
pub const PANEL_ACCEPT: &str = "application/vnd.pterodactyl.v1+json";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Client for the server command endpoint of a single game server.
#[derive(Clone)]
pub struct PanelClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl PanelClient {
    /// Create a client with its own connection pool.
    pub fn new(config: &PanelConfig) -> PanelResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| PanelError::Client(e.to_string()))?;
        Ok(Self::with_http_client(config, http))
    }

    /// Create a client on top of an existing `reqwest::Client`.
    pub fn with_http_client(config: &PanelConfig, http: reqwest::Client) -> Self {
        let endpoint = format!(
            "{}/api/client/servers/{}/command",
            config.api_url.trim_end_matches('/'),
            config.server_id
        );

        Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
        }
    }

    /// Full URL of the command endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Add or remove `username` on the server whitelist.
    pub async fn update_whitelist(&self, username: &str, action: WhitelistAction) -> PanelResult<()> {
        let command = WhitelistCommand::new(action, username)?;
        self.send_command(&command).await
    }

    /// Send a single console command to the panel.
    pub async fn send_command(&self, command: &WhitelistCommand) -> PanelResult<()> {
        let start = Instant::now();
        let action = command.action();

        tracing::info!(
            url = %self.endpoint,
            action = %action,
            username = %command.username(),
            "Whitelisting user"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, PANEL_ACCEPT)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(command.form_body())
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                let err = PanelError::transport(&e);
                tracing::error!(url = %self.endpoint, error = %err, "Panel request failed");
                metrics::record_panel_command(action, "transport_error", start);
                return Err(err);
            }
        };

        let status = response.status();
        if status == StatusCode::PRECONDITION_FAILED {
            tracing::warn!(status = %status, "Server might not be online. Status code is 412.");
        } else if !status.is_success() {
            tracing::warn!(status = %status, url = %self.endpoint, "Panel returned non-success status");
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                let err = PanelError::read_body(&e);
                tracing::error!(error = %err, "Failed to read response body");
                metrics::record_panel_command(action, "read_error", start);
                return Err(err);
            }
        };

        tracing::debug!(status = %status, body = %body, "Panel response");
        metrics::record_panel_command(action, status.as_str(), start);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(api_url: &str) -> PanelConfig {
        PanelConfig {
            api_url: api_url.to_string(),
            server_id: "1a2b3c4d".to_string(),
            api_key: "secret".to_string(),
        }
    }

    #[test]
    fn test_endpoint_format() {
        let client = PanelClient::new(&test_config("https://panel.example.com")).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://panel.example.com/api/client/servers/1a2b3c4d/command"
        );
    }

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        let client = PanelClient::new(&test_config("https://panel.example.com/")).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://panel.example.com/api/client/servers/1a2b3c4d/command"
        );
    }

    #[tokio::test]
    async fn test_invalid_username_skips_network() {
        // Nothing listens on port 1; reaching the network would yield a
        // transport error instead.
        let client = PanelClient::new(&test_config("http://127.0.0.1:1")).unwrap();
        let result = client.update_whitelist("bob&command=stop", WhitelistAction::Add).await;
        assert!(matches!(result, Err(PanelError::InvalidUsername(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let client = PanelClient::with_http_client(&test_config(&format!("http://{}", addr)), http);

        let err = client
            .update_whitelist("alice", WhitelistAction::Remove)
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::Transport(_)));
        assert!(err.to_string().contains(&addr.to_string()), "got: {}", err);
    }
}
