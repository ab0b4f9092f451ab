use std::collections::BTreeSet;

use serde::Serialize;

use super::encoder::Encoder;
use crate::error::Result;
use crate::model::MetricName;
use crate::schema::ComponentKind;
use crate::suite::{ConformanceReport, Outcome};
use crate::validator::LabelReport;

// {
//   "component": "apiserver",
//   "status": "failed",
//   "unknown_metrics": [],
//   "absent_metrics": [],
//   "invalid_labels": {"apiserver_request_count": ["client"]},
//   "missing_labels": {}
// }
#[derive(Serialize)]
struct JsonOutcome<'a> {
    component: ComponentKind,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
    #[serde(flatten)]
    findings: Option<JsonFindings<'a>>,
}

#[derive(Serialize)]
struct JsonFindings<'a> {
    unknown_metrics: &'a BTreeSet<MetricName>,
    absent_metrics: &'a BTreeSet<MetricName>,
    invalid_labels: &'a LabelReport,
    missing_labels: &'a LabelReport,
}

impl<'a> JsonFindings<'a> {
    fn new(report: &'a ConformanceReport) -> Self {
        Self {
            unknown_metrics: &report.unknown_metrics,
            absent_metrics: &report.absent_metrics,
            invalid_labels: &report.invalid_labels,
            missing_labels: &report.missing_labels,
        }
    }
}

pub struct JsonEncoder {}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, outcome: &Outcome) -> Result<Vec<u8>> {
        let out = match outcome {
            Outcome::Passed(report) | Outcome::Failed(report) => JsonOutcome {
                component: report.component,
                status: if outcome.is_failed() {
                    "failed"
                } else {
                    "passed"
                },
                reason: None,
                findings: Some(JsonFindings::new(report)),
            },
            Outcome::Skipped { component, reason } => JsonOutcome {
                component: *component,
                status: "skipped",
                reason: Some(reason.as_str()),
                findings: None,
            },
        };

        Ok(serde_json::to_vec(&out).map_err(|e| ("JSON serialization failed", e))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_passed() -> std::result::Result<(), String> {
        let report = ConformanceReport {
            component: ComponentKind::Kubelet,
            unknown_metrics: BTreeSet::new(),
            absent_metrics: BTreeSet::new(),
            invalid_labels: LabelReport::new(),
            missing_labels: LabelReport::new(),
        };
        let out = JsonEncoder::new().encode(&Outcome::Passed(report))?;
        assert_eq!(
            String::from_utf8_lossy(&out),
            r#"{"component":"kubelet","status":"passed","unknown_metrics":[],"absent_metrics":[],"invalid_labels":{},"missing_labels":{}}"#
        );
        Ok(())
    }

    #[test]
    fn test_encode_failed() -> std::result::Result<(), String> {
        let mut missing_labels = LabelReport::new();
        missing_labels.insert("m", "y");
        let report = ConformanceReport {
            component: ComponentKind::ApiServer,
            unknown_metrics: BTreeSet::new(),
            absent_metrics: vec!["a".to_string()].into_iter().collect(),
            invalid_labels: LabelReport::new(),
            missing_labels,
        };
        let out = JsonEncoder::new().encode(&Outcome::Failed(report))?;
        assert_eq!(
            String::from_utf8_lossy(&out),
            r#"{"component":"apiserver","status":"failed","unknown_metrics":[],"absent_metrics":["a"],"invalid_labels":{},"missing_labels":{"m":["y"]}}"#
        );
        Ok(())
    }

    #[test]
    fn test_encode_skipped() -> std::result::Result<(), String> {
        let out = JsonEncoder::new().encode(&Outcome::Skipped {
            component: ComponentKind::Scheduler,
            reason: "master node is not registered".into(),
        })?;
        assert_eq!(
            String::from_utf8_lossy(&out),
            r#"{"component":"scheduler","status":"skipped","reason":"master node is not registered"}"#
        );
        Ok(())
    }
}
