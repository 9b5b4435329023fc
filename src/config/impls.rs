//! Implementation blocks for configuration types.

pub mod configuration;
pub mod configuration_error;
pub mod exporter_config;
pub mod qbittorrent_config;
pub mod sentry_config;
