use std::collections::BTreeSet;

use super::report::LabelReport;
use crate::model::MetricName;

/// Sink for label findings. The validator only ever writes into it, so
/// several validation passes can share one accumulator and their
/// findings end up unioned per metric.
pub trait Accumulator {
    fn invalid_label(&mut self, metric: &str, label: &str);
    fn missing_label(&mut self, metric: &str, label: &str);
}

impl Accumulator for (&mut LabelReport, &mut LabelReport) {
    fn invalid_label(&mut self, metric: &str, label: &str) {
        self.0.insert(metric, label);
    }

    fn missing_label(&mut self, metric: &str, label: &str) {
        self.1.insert(metric, label);
    }
}

/// Everything one conformance check found.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Findings {
    pub invalid_labels: LabelReport,
    pub missing_labels: LabelReport,
    pub absent_metrics: BTreeSet<MetricName>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.invalid_labels.is_empty()
            && self.missing_labels.is_empty()
            && self.absent_metrics.is_empty()
    }
}

impl Accumulator for Findings {
    fn invalid_label(&mut self, metric: &str, label: &str) {
        self.invalid_labels.insert(metric, label);
    }

    fn missing_label(&mut self, metric: &str, label: &str) {
        self.missing_labels.insert(metric, label);
    }
}
