//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment (PT_API, PT_SERVER_ID, PT_API_KEY, HOST, PORT, ...)
//!     → schema.rs (clap parse, defaults)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → handed to HttpServer, never mutated afterwards
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - Command-line flags override environment variables
//! - Validation separates syntactic (clap) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::PanelConfig;
