use crate::collector::structs::metric_desc::MetricDesc;

#[derive(Debug, Default)]
pub struct CollectorState {
    pub torrents_count: Option<MetricDesc>,
    pub scrapes: u64,
    pub failed_scrapes: u64
}
