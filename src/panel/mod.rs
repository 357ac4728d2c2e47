//! Downstream management API (Pterodactyl panel) integration.
//!
//! # Data Flow
//! ```text
//! handler (username, action)
//!     → types.rs (WhitelistCommand: validate, format)
//!     → client.rs (POST {PT_API}/api/client/servers/{id}/command)
//!     → Ok(()) on any completed round-trip, PanelError otherwise
//! ```

pub mod client;
pub mod types;

pub use client::PanelClient;
pub use types::{PanelError, PanelResult, WhitelistAction, WhitelistCommand};
