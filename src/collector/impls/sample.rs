use crate::collector::structs::sample::Sample;

impl Sample {
    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels.iter()
            .find(|(label, _)| label == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_labels(&self, expected: &[(&str, &str)]) -> bool {
        expected.iter().all(|(name, value)| self.label(name) == Some(*value))
    }
}
