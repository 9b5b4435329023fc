//! qBittorrent Web API client.
//!
//! This module is the data source of the exporter. It keeps an authenticated
//! session with the daemon and exposes the three reads the collector needs:
//!
//! - `GET /api/v2/transfer/info` - daemon wide transfer status
//! - `GET /api/v2/torrents/categories` - configured categories
//! - `GET /api/v2/torrents/info` - every torrent with its state
//!
//! The reads are exposed through the [`traits::data_source::DataSource`]
//! trait so the collector can be driven by any implementation.
//!
//! # Authentication
//!
//! `POST /api/v2/auth/login` returns an `SID` cookie which is sent along with
//! every read. When the daemon answers `403 Forbidden` the session is renewed
//! once and the read is retried.

/// Client enumerations (errors, connection status).
pub mod enums;

/// Client data structures (client, transfer status, torrents, categories).
pub mod structs;

/// The data source abstraction consumed by the collector.
pub mod traits;

/// Implementation blocks for the client types.
pub mod impls;
