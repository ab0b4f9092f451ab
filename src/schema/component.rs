use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Kinds of components exposing a metrics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    #[serde(rename = "apiserver")]
    ApiServer,
    Kubelet,
    Scheduler,
    ControllerManager,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::ApiServer,
        ComponentKind::Kubelet,
        ComponentKind::Scheduler,
        ComponentKind::ControllerManager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::ApiServer => "apiserver",
            ComponentKind::Kubelet => "kubelet",
            ComponentKind::Scheduler => "scheduler",
            ComponentKind::ControllerManager => "controller-manager",
        }
    }

    // Singletons only run on a master node, and there may be none.
    pub fn is_singleton(&self) -> bool {
        matches!(
            self,
            ComponentKind::Scheduler | ComponentKind::ControllerManager
        )
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown component '{}'", s).into())
    }
}
