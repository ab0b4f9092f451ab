use std::collections::BTreeSet;
use std::io::Read;

use log::debug;
use serde::Deserialize;

use super::grabber::Grabber;
use crate::error::{Error, Result};
use crate::model::{
    Labels, MetricName, ObservedData, Sample, SampleValue, Timestamp, NAME_LABEL,
};
use crate::schema::{ComponentKind, SchemaRegistry};

// Instant vector in the Prometheus HTTP API shape:
// {
//   "resultType": "vector",
//   "result": [
//     {
//       "metric": {"__name__": "apiserver_request_count", "verb": "GET"},
//       "value": [1622104500, "10"]
//     }
//   ]
// }
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Vector {
    result_type: String,
    result: Vec<VectorItem>,
}

#[derive(Deserialize)]
struct VectorItem {
    metric: Labels,
    value: (f64, String),
}

/// Grabs a component's metrics from an already parsed dump.
pub struct DumpGrabber<'a, R> {
    reader: R,
    registry: &'a SchemaRegistry,
    kind: ComponentKind,
}

impl<'a, R: Read> DumpGrabber<'a, R> {
    pub fn new(reader: R, registry: &'a SchemaRegistry, kind: ComponentKind) -> Self {
        Self {
            reader,
            registry,
            kind,
        }
    }

    fn decode(&mut self) -> Result<Vector> {
        let vector: Vector = serde_json::from_reader(&mut self.reader)
            .map_err(|e| ("malformed metrics dump", e))?;

        if vector.result_type != "vector" {
            return Err(format!(
                "unsupported result type '{}', expected 'vector'",
                vector.result_type
            )
            .into());
        }
        Ok(vector)
    }
}

impl<'a, R: Read> Grabber for DumpGrabber<'a, R> {
    fn grab(&mut self, unknown: &mut BTreeSet<MetricName>) -> Result<ObservedData> {
        let vector = self.decode()?;

        // Every declared metric gets a series even if nothing was exposed.
        let mut data = ObservedData::new();
        let registry = self.registry;
        for metric in registry
            .common()
            .metrics()
            .chain(registry.schema_for(self.kind).metrics())
        {
            data.declare(metric.as_str());
        }

        for item in vector.result {
            let name = item
                .metric
                .get(NAME_LABEL)
                .cloned()
                .ok_or_else(|| Error::new("sample without __name__ label"))?;

            let (timestamp, value) = parse_value(&name, item.value)?;

            if !registry.is_known(&name) {
                unknown.insert(name.clone());
            }
            data.push(name, Sample::new(value, timestamp, item.metric));
        }

        debug!(
            "grabbed {} samples of {} metrics from {} ({} unknown)",
            data.sample_count(),
            data.len(),
            self.kind,
            unknown.len(),
        );
        Ok(data)
    }
}

fn parse_value(name: &str, (ts, value): (f64, String)) -> Result<(Timestamp, SampleValue)> {
    let value = value
        .parse::<SampleValue>()
        .map_err(|e| (format!("bad value '{}' of metric {}", value, name), e))?;
    Ok(((ts * 1000.0).round() as Timestamp, value))
}
