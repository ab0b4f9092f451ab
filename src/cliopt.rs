use std::path::PathBuf;
use std::str::FromStr;

use structopt::StructOpt;

use crate::error::Error;
use crate::schema::ComponentKind;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "mcheck",
    about = "Check a component's exposed metrics against declared label schemas"
)]
pub struct CliOpt {
    /// One of apiserver, kubelet, scheduler, controller-manager.
    pub component: ComponentKind,

    /// JSON file with the common and per-component label schemas.
    #[structopt(long = "schemas", short = "s", parse(from_os_str))]
    pub schemas: PathBuf,

    /// Pre-parsed metrics dump (instant vector JSON). Defaults to stdin.
    #[structopt(long = "input", short = "i", parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Registered cluster node, repeatable.
    #[structopt(long = "node", short = "n")]
    pub nodes: Vec<String>,

    #[structopt(long = "encode", short = "e", default_value = "h")]
    pub encode: Encoding,

    /// Also report declared labels that no sample carries.
    #[structopt(long = "missing-labels")]
    pub missing_labels: bool,

    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Encoding {
    HumanReadable,
    Json,
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" | "human" => Ok(Encoding::HumanReadable),
            "json" => Ok(Encoding::Json),
            _ => Err(format!("unsupported encoding '{}'", s).into()),
        }
    }
}
