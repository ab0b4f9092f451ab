use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::{LabelName, MetricName};

/// Label keys per metric name, e.g. the labels found in data but not
/// declared by the schema.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelReport {
    labels: BTreeMap<MetricName, BTreeSet<LabelName>>,
}

impl LabelReport {
    pub fn new() -> Self {
        Self::default()
    }

    // Returns true if the label was not reported for the metric yet.
    pub fn insert(&mut self, metric: &str, label: &str) -> bool {
        match self.labels.get_mut(metric) {
            Some(set) => set.insert(label.to_owned()),
            None => {
                let mut set = BTreeSet::new();
                set.insert(label.to_owned());
                self.labels.insert(metric.to_owned(), set);
                true
            }
        }
    }

    pub fn get(&self, metric: &str) -> Option<&BTreeSet<LabelName>> {
        self.labels.get(metric)
    }

    pub fn merge(&mut self, other: LabelReport) {
        for (metric, labels) in other.labels {
            self.labels.entry(metric).or_default().extend(labels);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    // Number of metrics with at least one reported label.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, MetricName, BTreeSet<LabelName>> {
        self.labels.iter()
    }
}

impl<'a> IntoIterator for &'a LabelReport {
    type Item = (&'a MetricName, &'a BTreeSet<LabelName>);
    type IntoIter = btree_map::Iter<'a, MetricName, BTreeSet<LabelName>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
