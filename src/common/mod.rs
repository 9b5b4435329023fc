//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules of the exporter.
//!
//! # Utilities
//!
//! - Logging setup
//! - Log level parsing
//! - Listen address parsing (`:9177`, `9177` or `host:port`)
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type used during bootstrap
//!
//! # Example
//!
//! ```rust,ignore
//! use qbittorrent_exporter::common::common::parse_bind_address;
//!
//! let address = parse_bind_address(":9177")?;
//! assert_eq!(address.port(), 9177);
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
