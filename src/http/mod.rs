//! HTTP surface of the exporter.
//!
//! # Endpoints
//!
//! - `GET /metrics` - runs one scrape and returns the Prometheus text format
//! - `GET /` - small HTML landing page linking to `/metrics`
//!
//! Any other path answers `404 Not Found` with a JSON body.

/// Data structures shared with the request handlers.
pub mod structs;

/// Server setup, routes and handlers.
#[allow(clippy::module_inception)]
pub mod http;
