//! Collector enumerations.

/// Gauge or counter.
pub mod metric_kind;

/// Semantic status buckets torrents are counted in.
pub mod status_bucket;

/// Lifecycle states reported by the daemon.
pub mod torrent_state;
