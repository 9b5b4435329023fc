use crate::collector::enums::metric_kind::MetricKind;

/// A single observation ready for exposition.
///
/// Labels keep their declaration order: constant labels first, then the
/// variable labels of the descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
    pub labels: Vec<(String, String)>,
    pub value: f64
}
