//! HTTP server for the event log.
//!
//! This module exposes the store over a small JSON API: create, list,
//! clear, and stats endpoints, plus a query-parameter ingest route for
//! constrained device firmware, Prometheus metrics, and health probes.

mod config;
mod error;
pub mod handlers;
mod http;
pub mod metrics;
mod middleware;
mod request;
mod response;

pub use config::{CliArgs, ServerConfig};
pub use http::HttpServer;
