use std::collections::{BTreeSet, HashSet};

use super::accumulator::Accumulator;
use super::report::LabelReport;
use crate::model::{is_internal_label, MetricName, ObservedData};
use crate::schema::LabelSchema;

/// Reconciles observed label keys with a label schema.
///
/// Only metrics declared by the schema are inspected. Every label key of
/// every sample is checked (internal `__` labels excepted) and the scan
/// never stops early, so the accumulator ends up with the complete list
/// of offending labels.
///
/// By default only the observed-minus-declared direction (invalid labels)
/// is computed and the missing-label report stays empty. Missing-label
/// detection, i.e. declared labels no sample of a non-empty series
/// carries, is opt-in via `with_missing_labels`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Validator {
    missing_labels: bool,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_labels(mut self, enabled: bool) -> Self {
        self.missing_labels = enabled;
        self
    }

    pub fn validate<A>(&self, schema: &LabelSchema, data: &ObservedData, acc: &mut A)
    where
        A: Accumulator,
    {
        for (metric, allowed) in schema.iter() {
            let series = match data.get(metric) {
                Some(series) if !series.is_empty() => series,
                _ => continue,
            };

            let mut seen = HashSet::new();
            for sample in series {
                for label in sample.labels().keys() {
                    if is_internal_label(label) {
                        continue;
                    }
                    if !allowed.contains(label) {
                        acc.invalid_label(metric, label);
                    }
                    seen.insert(label.as_str());
                }
            }

            if self.missing_labels {
                for label in allowed.iter().filter(|l| !seen.contains(l.as_str())) {
                    acc.missing_label(metric, label);
                }
            }
        }
    }
}

/// Collects labels found in `data` but not declared by `schema` into
/// `invalid`. `missing` is accepted for symmetry and left untouched.
pub fn validate_label_set(
    schema: &LabelSchema,
    data: &ObservedData,
    invalid: &mut LabelReport,
    missing: &mut LabelReport,
) {
    Validator::new().validate(schema, data, &mut (invalid, missing));
}

// Declared metrics the data has no entry for at all. An empty series
// counts as present.
pub fn absent_metrics(schema: &LabelSchema, data: &ObservedData) -> BTreeSet<MetricName> {
    schema
        .metrics()
        .filter(|metric| !data.contains(metric))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Labels, Sample};
    use crate::validator::Findings;

    fn sample(labels: &[(&str, &str)]) -> Sample {
        Sample::new(
            1.0,
            0,
            labels
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Labels>(),
        )
    }

    fn labels(report: &LabelReport, metric: &str) -> Vec<String> {
        report
            .get(metric)
            .map(|s| s.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn http_requests_schema() -> LabelSchema {
        LabelSchema::new()
            .with_metric("http_requests", vec!["method", "code"])
            .unwrap()
    }

    #[test]
    fn test_validate_label_set_reports_undeclared_labels() {
        let schema = http_requests_schema();
        let data: ObservedData = vec![(
            "http_requests",
            vec![
                sample(&[("method", "GET"), ("code", "200")]),
                sample(&[("method", "GET"), ("code", "200"), ("__name__", "x")]),
                sample(&[("verb", "GET")]),
            ],
        )]
        .into_iter()
        .collect();

        let mut invalid = LabelReport::new();
        let mut missing = LabelReport::new();
        validate_label_set(&schema, &data, &mut invalid, &mut missing);

        assert_eq!(invalid.len(), 1);
        assert_eq!(labels(&invalid, "http_requests"), vec!["verb"]);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_validate_label_set_scans_everything() {
        let schema = LabelSchema::new()
            .with_metric("a", vec!["x"])
            .unwrap()
            .with_metric("b", Vec::<String>::new())
            .unwrap();
        let data: ObservedData = vec![
            (
                "a",
                vec![
                    sample(&[("y", "1")]),
                    sample(&[("x", "1"), ("z", "2")]),
                    sample(&[("y", "3"), ("X", "4")]),
                ],
            ),
            ("b", vec![sample(&[("instance", "n1")])]),
        ]
        .into_iter()
        .collect();

        let mut findings = Findings::new();
        Validator::new().validate(&schema, &data, &mut findings);

        assert_eq!(labels(&findings.invalid_labels, "a"), vec!["X", "y", "z"]);
        assert_eq!(labels(&findings.invalid_labels, "b"), vec!["instance"]);
        assert!(findings.missing_labels.is_empty());
    }

    #[test]
    fn test_internal_labels_are_exempt() {
        let schema = LabelSchema::new()
            .with_metric("up", Vec::<String>::new())
            .unwrap();
        let data: ObservedData = vec![(
            "up",
            vec![sample(&[("__name__", "up"), ("__address__", "10.0.0.1")])],
        )]
        .into_iter()
        .collect();

        let mut findings = Findings::new();
        Validator::new()
            .with_missing_labels(true)
            .validate(&schema, &data, &mut findings);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_absent_metric_is_not_reported_as_label_finding() {
        let schema = LabelSchema::new().with_metric("a", vec!["x"]).unwrap();
        let data = ObservedData::new();

        let mut invalid = LabelReport::new();
        let mut missing = LabelReport::new();
        validate_label_set(&schema, &data, &mut invalid, &mut missing);

        assert!(invalid.is_empty());
        assert!(missing.is_empty());
        assert_eq!(
            absent_metrics(&schema, &data).into_iter().collect::<Vec<_>>(),
            vec!["a"]
        );
    }

    #[test]
    fn test_empty_series_is_neutral() {
        let schema = LabelSchema::new().with_metric("a", vec!["x"]).unwrap();
        let mut data = ObservedData::new();
        data.declare("a");

        let mut findings = Findings::new();
        Validator::new()
            .with_missing_labels(true)
            .validate(&schema, &data, &mut findings);

        assert!(findings.is_empty());
        assert!(absent_metrics(&schema, &data).is_empty());
    }

    #[test]
    fn test_unknown_metrics_are_not_inspected() {
        let schema = http_requests_schema();
        let data: ObservedData = vec![("other", vec![sample(&[("whatever", "1")])])]
            .into_iter()
            .collect();

        let mut findings = Findings::new();
        Validator::new()
            .with_missing_labels(true)
            .validate(&schema, &data, &mut findings);
        assert!(findings.invalid_labels.is_empty());
        assert!(findings.missing_labels.is_empty());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let schema = http_requests_schema();
        let data: ObservedData = vec![(
            "http_requests",
            vec![sample(&[("verb", "GET")]), sample(&[("host", "a")])],
        )]
        .into_iter()
        .collect();

        let mut first = Findings::new();
        let mut second = Findings::new();
        Validator::new().validate(&schema, &data, &mut first);
        Validator::new().validate(&schema, &data, &mut second);
        assert_eq!(first, second);

        // Re-running into the same accumulator does not grow it either.
        Validator::new().validate(&schema, &data, &mut first);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_labels_opt_in() {
        let schema = http_requests_schema();
        let data: ObservedData = vec![(
            "http_requests",
            vec![sample(&[("method", "GET")]), sample(&[("method", "PUT")])],
        )]
        .into_iter()
        .collect();

        let mut findings = Findings::new();
        Validator::new().validate(&schema, &data, &mut findings);
        assert!(findings.is_empty());

        Validator::new()
            .with_missing_labels(true)
            .validate(&schema, &data, &mut findings);
        assert!(findings.invalid_labels.is_empty());
        assert_eq!(labels(&findings.missing_labels, "http_requests"), vec!["code"]);
    }
}
