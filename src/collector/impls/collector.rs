use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use log::{debug, error};
use tokio::sync::Mutex;
use crate::client::structs::torrent::Torrent;
use crate::client::traits::data_source::DataSource;
use crate::collector::enums::metric_kind::MetricKind;
use crate::collector::enums::status_bucket::StatusBucket;
use crate::collector::structs::collector::Collector;
use crate::collector::structs::collector_state::CollectorState;
use crate::collector::structs::metric_desc::MetricDesc;
use crate::collector::structs::sample::Sample;

pub const UNCATEGORIZED: &str = "Uncategorized";
pub const TORRENTS_COUNT: &str = "torrents_count";

impl Collector {
    pub fn new(data_source: Arc<dyn DataSource>, namespace: &str, const_labels: BTreeMap<String, String>) -> Collector
    {
        let metric = |name: &str, help: &str, kind: MetricKind| {
            MetricDesc::new(namespace, name, help, kind, &[], &const_labels)
        };

        Collector {
            up_metric: metric("up", "Whether the qBittorrent API could be queried", MetricKind::Gauge),
            connected_metric: metric("connected", "Whether the daemon is connected", MetricKind::Gauge),
            firewalled_metric: metric("firewalled", "Whether the daemon is behind a firewall", MetricKind::Gauge),
            dht_nodes_metric: metric("dht_nodes", "DHT nodes connected to", MetricKind::Gauge),
            dl_info_data_metric: metric("dl_info_data_total", "Data downloaded this session (bytes)", MetricKind::Counter),
            up_info_data_metric: metric("up_info_data_total", "Data uploaded this session (bytes)", MetricKind::Counter),
            dl_info_speed_metric: metric("dl_info_speed", "Global download rate (bytes/s)", MetricKind::Gauge),
            up_info_speed_metric: metric("up_info_speed", "Global upload rate (bytes/s)", MetricKind::Gauge),
            dl_rate_limit_metric: metric("dl_rate_limit", "Global download rate limit, 0 if unlimited (bytes/s)", MetricKind::Gauge),
            up_rate_limit_metric: metric("up_rate_limit", "Global upload rate limit, 0 if unlimited (bytes/s)", MetricKind::Gauge),
            data_source,
            namespace: namespace.to_string(),
            const_labels,
            state: Mutex::new(CollectorState::default()),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Every descriptor this collector can emit.
    pub fn describe(&self) -> Vec<MetricDesc>
    {
        vec![
            self.up_metric.clone(),
            self.connected_metric.clone(),
            self.firewalled_metric.clone(),
            self.dht_nodes_metric.clone(),
            self.dl_info_data_metric.clone(),
            self.up_info_data_metric.clone(),
            self.dl_info_speed_metric.clone(),
            self.up_info_speed_metric.clone(),
            self.dl_rate_limit_metric.clone(),
            self.up_rate_limit_metric.clone(),
            self.torrents_count_metric(),
        ]
    }

    /// Runs one scrape cycle.
    ///
    /// Holds the scrape lock from the first read to the last sample. Any failed
    /// read ends the cycle with `up = 0` as the only sample.
    pub async fn collect(&self) -> Vec<Sample>
    {
        let mut state = self.state.lock().await;
        state.scrapes += 1;

        let status = match self.data_source.fetch_status().await {
            Ok(status) => status,
            Err(error) => {
                error!("[COLLECTOR] Error getting status: {error}");
                state.failed_scrapes += 1;
                return vec![self.up_metric.sample(&[], 0.0)];
            }
        };

        let categories = match self.data_source.fetch_categories().await {
            Ok(categories) => categories,
            Err(error) => {
                error!("[COLLECTOR] Error getting categories: {error}");
                state.failed_scrapes += 1;
                return vec![self.up_metric.sample(&[], 0.0)];
            }
        };

        let torrents = match self.data_source.fetch_items().await {
            Ok(torrents) => torrents,
            Err(error) => {
                error!("[COLLECTOR] Error getting torrents: {error}");
                state.failed_scrapes += 1;
                return vec![self.up_metric.sample(&[], 0.0)];
            }
        };

        let categories = aggregation_categories(&categories, &torrents);
        let mut samples = Vec::with_capacity(10 + categories.len() * StatusBucket::ALL.len());

        samples.push(self.up_metric.sample(&[], 1.0));
        samples.push(self.connected_metric.sample(&[], flag(status.connection.is_connected())));
        samples.push(self.firewalled_metric.sample(&[], flag(status.connection.is_firewalled())));

        samples.push(self.dht_nodes_metric.sample(&[], status.dht_nodes as f64));
        samples.push(self.dl_info_data_metric.sample(&[], status.downloaded as f64));
        samples.push(self.up_info_data_metric.sample(&[], status.uploaded as f64));
        samples.push(self.dl_info_speed_metric.sample(&[], status.download_speed as f64));
        samples.push(self.up_info_speed_metric.sample(&[], status.upload_speed as f64));
        samples.push(self.dl_rate_limit_metric.sample(&[], status.download_rate_limit.max(0) as f64));
        samples.push(self.up_rate_limit_metric.sample(&[], status.upload_rate_limit.max(0) as f64));

        if state.torrents_count.is_none() {
            state.torrents_count = Some(self.torrents_count_metric());
        }
        if let Some(torrents_count) = &state.torrents_count {
            for category in &categories {
                let category_torrents: Vec<&Torrent> = torrents.iter()
                    .filter(|torrent| in_category(torrent, category))
                    .collect();

                for bucket in StatusBucket::ALL {
                    let count = category_torrents.iter()
                        .filter(|torrent| bucket.contains(&torrent.state))
                        .count();
                    samples.push(torrents_count.sample(&[bucket.as_str(), category], count as f64));
                }
            }
        }

        debug!(
            "[COLLECTOR] Scrape #{} done: {} torrents, {} categories, {} samples ({} failed scrapes so far)",
            state.scrapes, torrents.len(), categories.len(), samples.len(), state.failed_scrapes
        );
        samples
    }

    fn torrents_count_metric(&self) -> MetricDesc
    {
        MetricDesc::new(
            &self.namespace,
            TORRENTS_COUNT,
            "Number of torrents in status under category",
            MetricKind::Gauge,
            &["status", "category"],
            &self.const_labels
        )
    }
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Whether a torrent is counted under `category`. Torrents without a category
/// are counted under `Uncategorized`.
pub fn in_category(torrent: &Torrent, category: &str) -> bool {
    torrent.category == category || (torrent.category.is_empty() && category == UNCATEGORIZED)
}

/// The categories to aggregate over: every configured category and every
/// category tag seen on a torrent, sorted and deduplicated, with
/// `Uncategorized` appended last exactly once.
pub fn aggregation_categories(categories: &[String], torrents: &[Torrent]) -> Vec<String> {
    let mut names: BTreeSet<&str> = BTreeSet::new();
    names.extend(categories.iter().map(String::as_str));
    names.extend(torrents.iter().map(|torrent| torrent.category.as_str()));
    names.remove("");
    names.remove(UNCATEGORIZED);

    let mut result: Vec<String> = names.into_iter().map(str::to_string).collect();
    result.push(UNCATEGORIZED.to_string());
    result
}

impl std::fmt::Debug for Collector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Collector")
            .field("namespace", &self.namespace)
            .field("const_labels", &self.const_labels)
            .finish()
    }
}
