use std::collections::BTreeMap;
use crate::collector::enums::metric_kind::MetricKind;

/// Describes one metric family: its fully qualified name, help text, kind and
/// label names.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDesc {
    pub fq_name: String,
    pub help: String,
    pub kind: MetricKind,
    pub const_labels: BTreeMap<String, String>,
    pub variable_labels: Vec<String>
}
