//! Pterodactyl whitelist gateway library.
//!
//! Exposes `POST /whitelist` and `DELETE /whitelist` and turns each call
//! into a `whitelist add|remove <username>` console command on a game
//! server managed by a Pterodactyl panel.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod panel;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use panel::PanelClient;
