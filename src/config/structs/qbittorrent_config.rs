use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct QBittorrentConfig {
    pub address: String,
    pub username: String,
    pub password: String,
    pub request_timeout: u64
}
