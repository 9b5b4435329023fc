use std::collections::BTreeMap;
use std::thread::available_parallelism;
use crate::config::structs::exporter_config::ExporterConfig;

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:9177".to_string(),
            metrics_prefix: "qbittorrent".to_string(),
            keep_alive: 60,
            request_timeout: 30,
            disconnect_timeout: 30,
            threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(2).min(4),
            const_labels: BTreeMap::new(),
        }
    }
}
