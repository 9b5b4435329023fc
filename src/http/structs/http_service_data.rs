use std::sync::Arc;
use crate::collector::structs::collector::Collector;
use crate::config::structs::exporter_config::ExporterConfig;

#[derive(Debug)]
pub struct HttpServiceData {
    pub collector: Arc<Collector>,
    pub exporter_config: Arc<ExporterConfig>
}
