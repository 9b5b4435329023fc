//! Client data structures.

/// Category entry of `/torrents/categories`.
pub mod category;

/// Authenticated Web API client.
pub mod qbittorrent_client;

/// Torrent entry of `/torrents/info`.
pub mod torrent;

/// Payload of `/transfer/info`.
pub mod transfer_status;
