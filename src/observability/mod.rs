//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers, panel client:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout log collector
//!     → Prometheus scrape (when METRICS_ADDRESS is set)
//! ```

pub mod logging;
pub mod metrics;
