use std::collections::BTreeMap;
use crate::collector::enums::metric_kind::MetricKind;
use crate::collector::structs::metric_desc::MetricDesc;
use crate::collector::structs::sample::Sample;

impl MetricDesc {
    pub fn new(namespace: &str, name: &str, help: &str, kind: MetricKind, variable_labels: &[&str], const_labels: &BTreeMap<String, String>) -> MetricDesc {
        let fq_name = if namespace.is_empty() {
            name.to_string()
        } else {
            format!("{namespace}_{name}")
        };
        MetricDesc {
            fq_name,
            help: help.to_string(),
            kind,
            const_labels: const_labels.clone(),
            variable_labels: variable_labels.iter().map(|label| label.to_string()).collect(),
        }
    }

    /// Builds a sample; `label_values` pairs up with `variable_labels` in order.
    pub fn sample(&self, label_values: &[&str], value: f64) -> Sample {
        let mut labels = Vec::with_capacity(self.const_labels.len() + self.variable_labels.len());
        for (name, value) in &self.const_labels {
            labels.push((name.clone(), value.clone()));
        }
        for (name, value) in self.variable_labels.iter().zip(label_values.iter()) {
            labels.push((name.clone(), value.to_string()));
        }
        Sample {
            name: self.fq_name.clone(),
            help: self.help.clone(),
            kind: self.kind,
            labels,
            value,
        }
    }
}
