//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! Every field is read from an environment variable, with a matching
//! command-line flag that takes precedence.

use std::fmt;
use std::net::SocketAddr;
use std::num::ParseIntError;

use clap::{Args, Parser};

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8008;

/// Root configuration for the whitelist gateway.
#[derive(Debug, Clone, Parser)]
#[command(name = "pterodactyl-whitelist", version)]
#[command(about = "HTTP gateway that edits a Pterodactyl server whitelist", long_about = None)]
pub struct AppConfig {
    /// Management API settings.
    #[command(flatten)]
    pub panel: PanelConfig,

    /// Listener configuration (bind address).
    #[command(flatten)]
    pub listener: ListenerConfig,

    /// Observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,
}

/// Pterodactyl panel connection settings.
#[derive(Clone, Args)]
pub struct PanelConfig {
    /// Base URL of the panel API (e.g. "https://panel.example.com").
    #[arg(long = "api-url", env = "PT_API")]
    pub api_url: String,

    /// Identifier of the game server whose whitelist is managed.
    #[arg(long = "server-id", env = "PT_SERVER_ID")]
    pub server_id: String,

    /// Client API key, sent as a bearer token.
    #[arg(long = "api-key", env = "PT_API_KEY", hide_env_values = true)]
    pub api_key: String,
}

impl fmt::Debug for PanelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelConfig")
            .field("api_url", &self.api_url)
            .field("server_id", &self.server_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Args)]
pub struct ListenerConfig {
    /// Bind host; empty means all interfaces.
    #[arg(long, env = "HOST", default_value = "")]
    pub host: String,

    /// Bind port; empty means the default.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT, value_parser = parse_port)]
    pub port: u16,
}

/// `PORT=` counts as unset.
fn parse_port(s: &str) -> Result<u16, ParseIntError> {
    let s = s.trim();
    if s.is_empty() {
        Ok(DEFAULT_PORT)
    } else {
        s.parse()
    }
}

impl ListenerConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        let host = self.host.trim();
        if host.is_empty() {
            format!("0.0.0.0:{}", self.port)
        } else if host.contains(':') && !host.starts_with('[') {
            // Bare IPv6 literal
            format!("[{}]:{}", host, self.port)
        } else {
            format!("{}:{}", host, self.port)
        }
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_PORT,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct ObservabilityConfig {
    /// Address for the Prometheus scrape endpoint; disabled when unset.
    #[arg(long = "metrics-address", env = "METRICS_ADDRESS")]
    pub metrics_address: Option<SocketAddr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listener(host: &str, port: u16) -> ListenerConfig {
        ListenerConfig {
            host: host.to_string(),
            port,
        }
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(listener("", 8008).bind_address(), "0.0.0.0:8008");
        assert_eq!(listener("127.0.0.1", 9000).bind_address(), "127.0.0.1:9000");
        assert_eq!(listener("localhost", 80).bind_address(), "localhost:80");
        assert_eq!(listener("::1", 8008).bind_address(), "[::1]:8008");
        assert_eq!(listener("[::]", 8008).bind_address(), "[::]:8008");
    }

    #[test]
    fn test_parse_from_flags() {
        let config = AppConfig::try_parse_from([
            "pterodactyl-whitelist",
            "--api-url",
            "http://x",
            "--server-id",
            "1",
            "--api-key",
            "secret",
            "--host",
            "127.0.0.1",
            "--port",
            "9001",
            "--metrics-address",
            "127.0.0.1:9100",
        ])
        .unwrap();

        assert_eq!(config.panel.api_url, "http://x");
        assert_eq!(config.panel.server_id, "1");
        assert_eq!(config.panel.api_key, "secret");
        assert_eq!(config.listener.bind_address(), "127.0.0.1:9001");
        assert_eq!(
            config.observability.metrics_address,
            Some("127.0.0.1:9100".parse().unwrap())
        );
    }

    #[test]
    fn test_rejects_invalid_port() {
        let result = AppConfig::try_parse_from([
            "pterodactyl-whitelist",
            "--api-url",
            "http://x",
            "--server-id",
            "1",
            "--api-key",
            "secret",
            "--port",
            "not-a-port",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(""), Ok(DEFAULT_PORT));
        assert_eq!(parse_port("   "), Ok(DEFAULT_PORT));
        assert_eq!(parse_port("9000"), Ok(9000));
        assert_eq!(parse_port(" 9000 "), Ok(9000));
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let panel = PanelConfig {
            api_url: "http://x".to_string(),
            server_id: "1".to_string(),
            api_key: "super-secret-key".to_string(),
        };
        let rendered = format!("{:?}", panel);
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
