//! HTTP front end for the Snip URL shortener.
//!
//! Maps the association routes onto an [`Associations`](snip_core::Associations)
//! implementation, exposes Prometheus metrics and a health probe, and owns the
//! process-level concerns of the `snip-gateway` binary: configuration and
//! graceful shutdown.

pub mod app;
pub mod cli;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod model;
pub mod server;
pub mod state;

pub use app::App;
pub use metrics::HttpMetrics;
pub use state::AppState;
