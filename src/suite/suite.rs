use std::collections::BTreeSet;

use log::{info, warn};
use serde::Serialize;

use super::cluster::Cluster;
use crate::checker::ConformanceChecker;
use crate::error::Result;
use crate::grabber::Grabber;
use crate::model::MetricName;
use crate::schema::{ComponentKind, SchemaRegistry};
use crate::validator::LabelReport;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConformanceReport {
    pub component: ComponentKind,
    pub unknown_metrics: BTreeSet<MetricName>,
    pub absent_metrics: BTreeSet<MetricName>,
    pub invalid_labels: LabelReport,
    pub missing_labels: LabelReport,
}

impl ConformanceReport {
    pub fn is_compliant(&self) -> bool {
        self.unknown_metrics.is_empty()
            && self.absent_metrics.is_empty()
            && self.invalid_labels.is_empty()
            && self.missing_labels.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Passed(ConformanceReport),
    Failed(ConformanceReport),
    Skipped {
        component: ComponentKind,
        reason: String,
    },
}

impl Outcome {
    pub fn component(&self) -> ComponentKind {
        match self {
            Outcome::Passed(report) | Outcome::Failed(report) => report.component,
            Outcome::Skipped { component, .. } => *component,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// Runs one grab-and-check scenario per component.
pub struct Suite<'a> {
    registry: &'a SchemaRegistry,
    cluster: Cluster,
    checker: ConformanceChecker,
}

impl<'a> Suite<'a> {
    pub fn new(registry: &'a SchemaRegistry, cluster: Cluster) -> Self {
        Self {
            registry,
            cluster,
            checker: ConformanceChecker::new(registry.common().clone()),
        }
    }

    pub fn with_missing_labels(mut self, enabled: bool) -> Self {
        self.checker = self.checker.with_missing_labels(enabled);
        self
    }

    pub fn run<G: Grabber>(&self, kind: ComponentKind, grabber: &mut G) -> Result<Outcome> {
        if kind.is_singleton() && !self.cluster.has_master() {
            let reason = "master node is not registered".to_owned();
            info!("{}, skipping {} metrics", reason, kind);
            return Ok(Outcome::Skipped {
                component: kind,
                reason,
            });
        }

        let mut unknown_metrics = BTreeSet::new();
        let response = grabber.grab(&mut unknown_metrics)?;

        let findings = self
            .checker
            .inspect(&response, self.registry.schema_for(kind));

        let report = ConformanceReport {
            component: kind,
            unknown_metrics,
            absent_metrics: findings.absent_metrics,
            invalid_labels: findings.invalid_labels,
            missing_labels: findings.missing_labels,
        };

        if report.is_compliant() {
            info!("{} metrics conform to the schema", kind);
            Ok(Outcome::Passed(report))
        } else {
            warn!(
                "{} metrics do not conform: {} unknown, {} absent, {} with invalid labels, {} with missing labels",
                kind,
                report.unknown_metrics.len(),
                report.absent_metrics.len(),
                report.invalid_labels.len(),
                report.missing_labels.len(),
            );
            Ok(Outcome::Failed(report))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Labels, ObservedData, Sample};
    use crate::schema::LabelSchema;

    struct StaticGrabber {
        data: ObservedData,
        unknown: Vec<&'static str>,
        calls: usize,
    }

    impl Grabber for StaticGrabber {
        fn grab(&mut self, unknown: &mut BTreeSet<MetricName>) -> Result<ObservedData> {
            self.calls += 1;
            unknown.extend(self.unknown.iter().map(|s| s.to_string()));
            Ok(self.data.clone())
        }
    }

    struct FailingGrabber;

    impl Grabber for FailingGrabber {
        fn grab(&mut self, _: &mut BTreeSet<MetricName>) -> Result<ObservedData> {
            Err(Error::new("connection refused"))
        }
    }

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new(LabelSchema::new().with_metric("up", Vec::<String>::new()).unwrap())
            .with_component(
                ComponentKind::Scheduler,
                LabelSchema::new()
                    .with_metric("scheduler_e2e_scheduling_latency_microseconds", vec!["quantile"])
                    .unwrap(),
            )
    }

    fn grabber(labels: &[&str], unknown: Vec<&'static str>) -> StaticGrabber {
        let labels = labels
            .iter()
            .map(|l| (l.to_string(), "v".to_string()))
            .collect::<Labels>();
        let data: ObservedData = vec![
            ("up", vec![Sample::named("up".into(), 1.0, 0, Labels::new())]),
            (
                "scheduler_e2e_scheduling_latency_microseconds",
                vec![Sample::new(1.0, 0, labels)],
            ),
        ]
        .into_iter()
        .collect();
        StaticGrabber {
            data,
            unknown,
            calls: 0,
        }
    }

    #[test]
    fn test_run_skips_singleton_without_master() -> std::result::Result<(), String> {
        let registry = registry();
        let suite = Suite::new(&registry, Cluster::new(vec!["node-1".into()]));
        let mut grabber = grabber(&["quantile"], vec![]);

        let outcome = suite.run(ComponentKind::Scheduler, &mut grabber)?;
        assert_eq!(
            outcome,
            Outcome::Skipped {
                component: ComponentKind::Scheduler,
                reason: "master node is not registered".into(),
            }
        );
        assert_eq!(grabber.calls, 0);
        Ok(())
    }

    #[test]
    fn test_run_passes() -> std::result::Result<(), String> {
        let registry = registry();
        let suite = Suite::new(&registry, Cluster::new(vec!["kubernetes-master".into()]));
        let mut grabber = grabber(&["quantile"], vec![]);

        let outcome = suite.run(ComponentKind::Scheduler, &mut grabber)?;
        assert!(matches!(outcome, Outcome::Passed(ref r) if r.is_compliant()));
        assert_eq!(outcome.component(), ComponentKind::Scheduler);
        assert_eq!(grabber.calls, 1);
        Ok(())
    }

    #[test]
    fn test_run_fails_on_invalid_labels_and_unknown_metrics() -> std::result::Result<(), String> {
        let registry = registry();
        let suite = Suite::new(&registry, Cluster::new(vec!["kubernetes-master".into()]));
        let mut grabber = grabber(&["quantile", "result"], vec!["scheduler_binding_latency"]);

        let outcome = suite.run(ComponentKind::Scheduler, &mut grabber)?;
        assert!(outcome.is_failed());
        match outcome {
            Outcome::Failed(report) => {
                assert_eq!(report.unknown_metrics.len(), 1);
                assert!(report.absent_metrics.is_empty());
                assert!(report
                    .invalid_labels
                    .get("scheduler_e2e_scheduling_latency_microseconds")
                    .map_or(false, |s| s.contains("result")));
            }
            _ => return Err("expected a failed outcome".into()),
        }
        Ok(())
    }

    #[test]
    fn test_run_non_singleton_ignores_cluster() -> std::result::Result<(), String> {
        let registry = registry();
        let suite = Suite::new(&registry, Cluster::default());
        let mut grabber = grabber(&[], vec![]);

        let outcome = suite.run(ComponentKind::ApiServer, &mut grabber)?;
        assert!(matches!(outcome, Outcome::Passed(_)));
        assert_eq!(grabber.calls, 1);
        Ok(())
    }

    #[test]
    fn test_run_propagates_grab_errors() {
        let registry = registry();
        let suite = Suite::new(&registry, Cluster::default());

        match suite.run(ComponentKind::Kubelet, &mut FailingGrabber) {
            Err(e) => assert_eq!(e.message(), "connection refused"),
            Ok(_) => panic!("grab error must be propagated"),
        }
    }
}
