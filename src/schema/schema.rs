use std::collections::btree_map::{self, BTreeMap};
use std::convert::TryFrom;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{LabelName, MetricName};

lazy_static! {
    static ref METRIC_NAME_RE: Regex = Regex::new(r"^[a-zA-Z_:][a-zA-Z0-9_:]*$").unwrap();
    static ref LABEL_NAME_RE: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

/// Permitted label keys per metric name.
///
/// A schema is built once (usually deserialized from configuration) and
/// only read afterwards. Label lists keep their declared order but are
/// matched as sets.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<MetricName, Vec<LabelName>>")]
pub struct LabelSchema {
    metrics: BTreeMap<MetricName, Vec<LabelName>>,
}

impl LabelSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metric<N, L, I>(mut self, metric: N, labels: I) -> Result<Self>
    where
        N: Into<MetricName>,
        L: Into<LabelName>,
        I: IntoIterator<Item = L>,
    {
        let metric = metric.into();
        let labels = labels.into_iter().map(Into::into).collect::<Vec<_>>();
        validate_entry(&metric, &labels)?;
        self.metrics.insert(metric, labels);
        Ok(self)
    }

    pub fn allowed(&self, metric: &str) -> Option<&[LabelName]> {
        self.metrics.get(metric).map(Vec::as_slice)
    }

    pub fn permits(&self, metric: &str, label: &str) -> bool {
        self.allowed(metric)
            .map_or(false, |labels| labels.iter().any(|l| l == label))
    }

    pub fn contains(&self, metric: &str) -> bool {
        self.metrics.contains_key(metric)
    }

    pub fn metrics(&self) -> impl Iterator<Item = &MetricName> {
        self.metrics.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, MetricName, Vec<LabelName>> {
        self.metrics.iter()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    // Per-metric union. Labels of `self` come first, then the ones only
    // `other` declares.
    pub fn union(&self, other: &LabelSchema) -> LabelSchema {
        let mut metrics = self.metrics.clone();
        for (metric, labels) in other.iter() {
            let merged = metrics.entry(metric.clone()).or_default();
            for label in labels {
                if !merged.contains(label) {
                    merged.push(label.clone());
                }
            }
        }
        LabelSchema { metrics }
    }
}

impl TryFrom<BTreeMap<MetricName, Vec<LabelName>>> for LabelSchema {
    type Error = Error;

    fn try_from(metrics: BTreeMap<MetricName, Vec<LabelName>>) -> Result<Self> {
        for (metric, labels) in metrics.iter() {
            validate_entry(metric, labels)?;
        }
        Ok(Self { metrics })
    }
}

fn validate_entry(metric: &str, labels: &[LabelName]) -> Result<()> {
    if !METRIC_NAME_RE.is_match(metric) {
        return Err(format!("malformed metric name '{}'", metric).into());
    }
    for label in labels {
        if !LABEL_NAME_RE.is_match(label) {
            return Err(format!("malformed label name '{}' of metric '{}'", label, metric).into());
        }
    }
    Ok(())
}
