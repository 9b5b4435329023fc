use serde::{Deserialize, Serialize};
use crate::client::enums::connection_status::ConnectionStatus;

/// Daemon wide transfer state, valid for a single scrape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct TransferStatus {
    #[serde(rename = "connection_status")]
    pub connection: ConnectionStatus,
    pub dht_nodes: u64,
    #[serde(rename = "dl_info_data")]
    pub downloaded: u64,
    #[serde(rename = "dl_info_speed")]
    pub download_speed: u64,
    #[serde(rename = "dl_rate_limit")]
    pub download_rate_limit: i64,
    #[serde(rename = "up_info_data")]
    pub uploaded: u64,
    #[serde(rename = "up_info_speed")]
    pub upload_speed: u64,
    #[serde(rename = "up_rate_limit")]
    pub upload_rate_limit: i64
}
