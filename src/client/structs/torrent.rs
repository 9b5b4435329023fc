use serde::{Deserialize, Serialize};

/// One torrent as returned by `/torrents/info`.
///
/// Only `hash`, `category` and `state` take part in aggregation, everything
/// else is decoded as-is. Missing fields fall back to their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Torrent {
    pub hash: String,
    pub name: String,
    pub category: String,
    pub state: String,
    pub tags: String,
    pub added_on: i64,
    pub amount_left: i64,
    pub auto_tmm: bool,
    pub completed: i64,
    pub completion_on: i64,
    #[serde(rename = "dl_limit")]
    pub download_limit: i64,
    #[serde(rename = "dlspeed")]
    pub download_speed: i64,
    pub downloaded: i64,
    pub downloaded_session: i64,
    pub eta: i64,
    #[serde(rename = "f_l_piece_prio")]
    pub first_last_piece_priority: bool,
    pub force_start: bool,
    pub last_activity: i64,
    pub magnet_uri: String,
    pub max_ratio: f64,
    pub max_seeding_time: i64,
    pub num_complete: i64,
    pub num_incomplete: i64,
    pub num_leechs: i64,
    pub num_seeds: i64,
    pub priority: i64,
    pub progress: f64,
    pub ratio: f64,
    pub ratio_limit: f64,
    pub save_path: String,
    pub seeding_time_limit: i64,
    pub seen_complete: i64,
    #[serde(rename = "seq_dl")]
    pub sequential_download: bool,
    pub size: i64,
    pub super_seeding: bool,
    pub time_active: i64,
    pub total_size: i64,
    pub tracker: String,
    #[serde(rename = "up_limit")]
    pub upload_limit: i64,
    pub uploaded: i64,
    pub uploaded_session: i64,
    #[serde(rename = "upspeed")]
    pub upload_speed: i64
}
