//! Implementation blocks for client types.

pub mod connection_status;
pub mod qbittorrent_client;
