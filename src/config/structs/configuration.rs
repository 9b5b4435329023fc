use serde::{Deserialize, Serialize};
use crate::config::structs::exporter_config::ExporterConfig;
use crate::config::structs::qbittorrent_config::QBittorrentConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub qbittorrent: QBittorrentConfig,
    pub exporter: ExporterConfig,
    #[serde(rename = "sentry")]
    pub sentry_config: SentryConfig
}
