use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use crate::client::traits::data_source::DataSource;
use crate::collector::structs::collector_state::CollectorState;
use crate::collector::structs::metric_desc::MetricDesc;

/// Turns the daemon state into samples, one scrape at a time.
///
/// `state` is held for the whole of `collect`, so overlapping scrapes run one
/// after the other against the shared session.
pub struct Collector {
    pub(crate) data_source: Arc<dyn DataSource>,
    pub(crate) namespace: String,
    pub(crate) const_labels: BTreeMap<String, String>,
    pub(crate) up_metric: MetricDesc,
    pub(crate) connected_metric: MetricDesc,
    pub(crate) firewalled_metric: MetricDesc,
    pub(crate) dht_nodes_metric: MetricDesc,
    pub(crate) dl_info_data_metric: MetricDesc,
    pub(crate) up_info_data_metric: MetricDesc,
    pub(crate) dl_info_speed_metric: MetricDesc,
    pub(crate) up_info_speed_metric: MetricDesc,
    pub(crate) dl_rate_limit_metric: MetricDesc,
    pub(crate) up_rate_limit_metric: MetricDesc,
    pub(crate) state: Mutex<CollectorState>
}
