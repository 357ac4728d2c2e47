//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace layer)
//!     → whitelist.rs (POST / DELETE /whitelist)
//!         → request.rs (exactly one username)
//!         → panel client (downstream command)
//!     → response.rs (JSON envelope + status)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;
pub mod whitelist;

pub use response::ApiResponse;
pub use server::{AppState, HttpServer};
