use serde::{Deserialize, Serialize};

/// Directed edge between two nodes, drawn as an arrow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    /// Unique identifier
    pub id: String,

    /// Source node (the arrow starts here)
    pub from: String,

    /// Destination node (the arrow points here)
    pub to: String,

    /// Optional label drawn at the edge midpoint
    pub label: Option<String>,
}

impl Edge {
    /// Create a new unlabeled edge
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            label: None,
        }
    }

    /// Attach a label to the edge
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Check if this edge touches a given node
    pub fn involves(&self, node_id: &str) -> bool {
        self.from == node_id || self.to == node_id
    }

    /// Check if this edge starts from a given node
    pub fn starts_from(&self, node_id: &str) -> bool {
        self.from == node_id
    }

    /// Check if this edge ends at a given node
    pub fn ends_at(&self, node_id: &str) -> bool {
        self.to == node_id
    }
}
