use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::component::ComponentKind;
use super::schema::LabelSchema;
use crate::error::Result;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRegistry {
    #[serde(default)]
    common: LabelSchema,
    #[serde(default)]
    components: BTreeMap<String, LabelSchema>,
}

/// The common label schema plus one schema per component kind.
///
/// Loaded once at startup and handed around by reference.
#[derive(Debug, Default, Clone)]
pub struct SchemaRegistry {
    common: LabelSchema,
    components: BTreeMap<ComponentKind, LabelSchema>,
    empty: LabelSchema,
}

impl SchemaRegistry {
    pub fn new(common: LabelSchema) -> Self {
        Self {
            common,
            ..Self::default()
        }
    }

    pub fn with_component(mut self, kind: ComponentKind, schema: LabelSchema) -> Self {
        self.components.insert(kind, schema);
        self
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawRegistry =
            serde_json::from_reader(reader).map_err(|e| ("malformed schema registry", e))?;

        let mut registry = Self::new(raw.common);
        for (name, schema) in raw.components {
            registry = registry.with_component(name.parse()?, schema);
        }
        Ok(registry)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| (format!("cannot open schema file {}", path.display()), e))?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn common(&self) -> &LabelSchema {
        &self.common
    }

    // Components the configuration does not mention get an empty schema.
    pub fn schema_for(&self, kind: ComponentKind) -> &LabelSchema {
        self.components.get(&kind).unwrap_or(&self.empty)
    }

    pub fn is_known(&self, metric: &str) -> bool {
        self.common.contains(metric) || self.components.values().any(|s| s.contains(metric))
    }
}
