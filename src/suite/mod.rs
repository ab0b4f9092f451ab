mod cluster;
mod suite;

pub use cluster::Cluster;
pub use suite::{ConformanceReport, Outcome, Suite};
