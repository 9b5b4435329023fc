use crate::config::structs::qbittorrent_config::QBittorrentConfig;

impl Default for QBittorrentConfig {
    fn default() -> Self {
        Self {
            address: "http://localhost:8080".to_string(),
            username: String::new(),
            password: String::new(),
            request_timeout: 10,
        }
    }
}
