//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// qBittorrent Web API connection settings.
pub mod qbittorrent_config;

/// Exporter HTTP server and metrics settings.
pub mod exporter_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
