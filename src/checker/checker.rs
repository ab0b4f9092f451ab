use log::{debug, warn};

use crate::error::Result;
use crate::model::ObservedData;
use crate::schema::LabelSchema;
use crate::validator::{absent_metrics, Findings, Validator};

/// Checks one grab response against the common label schema and a
/// component schema.
///
/// Findings under either schema are merged. When both schemas declare the
/// same metric, a label permitted by either of them is permitted.
pub struct ConformanceChecker {
    common: LabelSchema,
    validator: Validator,
}

impl ConformanceChecker {
    pub fn new(common: LabelSchema) -> Self {
        Self {
            common,
            validator: Validator::new(),
        }
    }

    pub fn with_missing_labels(mut self, enabled: bool) -> Self {
        self.validator = self.validator.with_missing_labels(enabled);
        self
    }

    pub fn common(&self) -> &LabelSchema {
        &self.common
    }

    pub fn inspect(&self, response: &ObservedData, assumed: &LabelSchema) -> Findings {
        let schema = self.common.union(assumed);

        let mut findings = Findings::new();
        self.validator.validate(&schema, response, &mut findings);
        findings.absent_metrics = absent_metrics(&schema, response);

        debug!(
            "checked {} declared metrics against {} observed ({} samples)",
            schema.len(),
            response.len(),
            response.sample_count(),
        );
        findings
    }

    // Fails with every finding listed in the error message.
    pub fn check_metrics(&self, response: &ObservedData, assumed: &LabelSchema) -> Result<()> {
        let findings = self.inspect(response, assumed);
        if findings.is_empty() {
            return Ok(());
        }

        let message = describe(&findings);
        warn!("{}", message);
        Err(message.into())
    }
}

fn describe(findings: &Findings) -> String {
    let mut parts = Vec::new();
    for metric in findings.absent_metrics.iter() {
        parts.push(format!("absent metric {}", metric));
    }
    for (metric, labels) in findings.invalid_labels.iter() {
        parts.push(format!(
            "invalid labels {}: {}",
            metric,
            labels.iter().cloned().collect::<Vec<_>>().join(", ")
        ));
    }
    for (metric, labels) in findings.missing_labels.iter() {
        parts.push(format!(
            "missing labels {}: {}",
            metric,
            labels.iter().cloned().collect::<Vec<_>>().join(", ")
        ));
    }
    format!("nonconformant metrics: {}", parts.join("; "))
}
