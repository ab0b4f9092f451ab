const MASTER_SUFFIX: &str = "master";

/// What the suite knows about the target cluster.
#[derive(Debug, Default, Clone)]
pub struct Cluster {
    nodes: Vec<String>,
}

impl Cluster {
    pub fn new(nodes: Vec<String>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    // Singleton components are only reachable when a master node is registered.
    pub fn has_master(&self) -> bool {
        self.nodes.iter().any(|n| n.ends_with(MASTER_SUFFIX))
    }
}
