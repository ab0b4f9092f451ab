use super::labels::{Labels, NAME_LABEL};
use super::types::{MetricName, SampleValue, Timestamp};

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    value: SampleValue,
    timestamp: Timestamp,
    labels: Labels,
}

impl Sample {
    pub fn new(value: SampleValue, timestamp: Timestamp, labels: Labels) -> Self {
        Self {
            value,
            timestamp,
            labels,
        }
    }

    // Same as new() but also stamps the sample with its metric name.
    pub fn named(
        name: MetricName,
        value: SampleValue,
        timestamp: Timestamp,
        mut labels: Labels,
    ) -> Self {
        labels.insert(NAME_LABEL.into(), name);
        Self::new(value, timestamp, labels)
    }

    #[inline]
    pub fn value(&self) -> SampleValue {
        self.value
    }

    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    #[inline]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels.get(name).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.label(NAME_LABEL)
    }
}
