//! # qBittorrent Exporter
//!
//! A Prometheus exporter for the qBittorrent BitTorrent daemon, built on
//! Actix-web.
//!
//! ## Overview
//!
//! Every `GET /metrics` request triggers one scrape: the exporter reads the
//! daemon's transfer status, category list and torrent list through the
//! qBittorrent Web API, classifies every torrent into status buckets and
//! returns the counts per status and category in the Prometheus text format.
//!
//! Scrapes never overlap. A failed read turns the whole scrape into a single
//! `<prefix>_up 0` sample.
//!
//! ## Exported Metrics
//!
//! | Metric | Type | Labels |
//! |---|---|---|
//! | `<prefix>_up` | gauge | |
//! | `<prefix>_connected` | gauge | |
//! | `<prefix>_firewalled` | gauge | |
//! | `<prefix>_dht_nodes` | gauge | |
//! | `<prefix>_dl_info_data_total` | counter | |
//! | `<prefix>_up_info_data_total` | counter | |
//! | `<prefix>_dl_info_speed` | gauge | |
//! | `<prefix>_up_info_speed` | gauge | |
//! | `<prefix>_dl_rate_limit` | gauge | |
//! | `<prefix>_up_rate_limit` | gauge | |
//! | `<prefix>_torrents_count` | gauge | `status`, `category` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::collections::BTreeMap;
//! use std::sync::Arc;
//! use qbittorrent_exporter::client::structs::qbittorrent_client::QBittorrentClient;
//! use qbittorrent_exporter::collector::structs::collector::Collector;
//!
//! let client = QBittorrentClient::new("http://localhost:8080", "admin", "adminadmin", Duration::from_secs(10))?;
//! client.login().await?;
//! let collector = Collector::new(Arc::new(client), "qbittorrent", BTreeMap::new());
//! let samples = collector.collect().await;
//! ```
//!
//! ## Modules
//!
//! - [`client`] - qBittorrent Web API client and the data source trait
//! - [`collector`] - Scrape pipeline and status classification
//! - [`common`] - Logging setup, address parsing and error helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - Metrics endpoint and landing page
//! - [`metrics`] - Prometheus text exposition
//! - [`structs`] - CLI argument parsing

/// qBittorrent Web API client.
///
/// Handles the login session and the three reads a scrape needs.
pub mod client;

/// Scrape pipeline.
///
/// Turns a snapshot of the daemon into metric samples.
pub mod collector;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Loads `config.toml`, applies environment and command line overrides and
/// validates the result.
pub mod config;

/// HTTP server exposing `/metrics`.
pub mod http;

/// Prometheus text format rendering.
pub mod metrics;

/// Command-line interface structures.
pub mod structs;
