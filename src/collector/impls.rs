//! Implementation blocks for collector types.

pub mod collector;
pub mod metric_desc;
pub mod metric_kind;
pub mod sample;
pub mod status_bucket;
pub mod torrent_state;
