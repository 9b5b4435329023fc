//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the exporter
//! configuration from a TOML file, and applies command-line/environment
//! overrides on top of it.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains sections for:
//! - **log_level**: Logging verbosity
//! - **qbittorrent**: Web API address, credentials and request timeout
//! - **exporter**: Listen address, metrics prefix, constant labels and
//!   HTTP server tuning
//! - **sentry**: Error reporting configuration
//!
//! # Overrides
//!
//! `QBITTORRENT_ADDR`, `QBITTORRENT_USER`, `QBITTORRENT_PASS`, `EXPORTER_PORT`
//! and `METRICS_PREFIX` can be given as flags or environment variables and
//! win over the file.
//!
//! # Example
//!
//! ```rust,ignore
//! use qbittorrent_exporter::config::structs::configuration::Configuration;
//!
//! let mut config = Configuration::load_from_file("config.toml", false)?;
//! config.apply_overrides(&cli);
//! Configuration::validate(&config)?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
