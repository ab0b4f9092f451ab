use std::collections::BTreeSet;

use super::encoder::Encoder;
use crate::error::Result;
use crate::suite::{ConformanceReport, Outcome};
use crate::validator::LabelReport;

pub struct HumanReadableEncoder {}

impl HumanReadableEncoder {
    pub fn new() -> Self {
        Self {}
    }

    fn encode_report(&self, status: &str, report: &ConformanceReport) -> Vec<String> {
        let mut lines = vec![format!("{} {}", status, report.component)];
        push_metrics(&mut lines, "unknown metric", &report.unknown_metrics);
        push_metrics(&mut lines, "absent metric", &report.absent_metrics);
        push_labels(&mut lines, "invalid labels", &report.invalid_labels);
        push_labels(&mut lines, "missing labels", &report.missing_labels);
        lines
    }
}

impl Default for HumanReadableEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for HumanReadableEncoder {
    fn encode(&self, outcome: &Outcome) -> Result<Vec<u8>> {
        let lines = match outcome {
            Outcome::Passed(report) => self.encode_report("PASS", report),
            Outcome::Failed(report) => self.encode_report("FAIL", report),
            Outcome::Skipped { component, reason } => {
                vec![format!("SKIP {}: {}", component, reason)]
            }
        };
        Ok(lines.join("\n").into_bytes())
    }
}

fn push_metrics(lines: &mut Vec<String>, what: &str, metrics: &BTreeSet<String>) {
    for metric in metrics {
        lines.push(format!("  {} {}", what, metric));
    }
}

fn push_labels(lines: &mut Vec<String>, what: &str, report: &LabelReport) {
    for (metric, labels) in report {
        let labels = labels.iter().map(String::as_str).collect::<Vec<_>>();
        lines.push(format!("  {} {}: {}", what, metric, labels.join(", ")));
    }
}
