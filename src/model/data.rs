use std::collections::hash_map::{self, HashMap};

use super::sample::Sample;
use super::types::MetricName;

pub type MetricSeries = Vec<Sample>;

// Everything a single grab returned, keyed by metric name. A declared
// metric may map to an empty series.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ObservedData {
    series: HashMap<MetricName, MetricSeries>,
}

impl ObservedData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: &str) -> Option<&MetricSeries> {
        self.series.get(metric)
    }

    pub fn contains(&self, metric: &str) -> bool {
        self.series.contains_key(metric)
    }

    // Makes sure the metric has a (possibly empty) series.
    pub fn declare<N: Into<MetricName>>(&mut self, metric: N) {
        self.series.entry(metric.into()).or_default();
    }

    pub fn push<N: Into<MetricName>>(&mut self, metric: N, sample: Sample) {
        self.series.entry(metric.into()).or_default().push(sample);
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn sample_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, MetricName, MetricSeries> {
        self.series.iter()
    }
}

impl From<HashMap<MetricName, MetricSeries>> for ObservedData {
    fn from(series: HashMap<MetricName, MetricSeries>) -> Self {
        Self { series }
    }
}

impl<N: Into<MetricName>> std::iter::FromIterator<(N, MetricSeries)> for ObservedData {
    fn from_iter<I: IntoIterator<Item = (N, MetricSeries)>>(iter: I) -> Self {
        Self {
            series: iter.into_iter().map(|(n, s)| (n.into(), s)).collect(),
        }
    }
}
