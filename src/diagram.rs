use crate::{DiagramEvent, Edge, EventType, Node};
use anyhow::{anyhow, Result};
use std::collections::HashMap;

/// Diagram containing all nodes and edges
///
/// Sole owner of the diagram state. The drag controller writes through
/// `set_node_position`; everything else only reads. Writes are visible to
/// the next read, there is no buffering.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    /// All nodes indexed by ID
    nodes: HashMap<String, Node>,

    /// All edges indexed by ID
    edges: HashMap<String, Edge>,

    /// Node IDs in insertion order, for stable render order
    node_order: Vec<String>,

    /// Edge IDs in insertion order
    edge_order: Vec<String>,

    /// Event log for history tracking
    events: Vec<DiagramEvent>,
}

impl Diagram {
    /// Create a new empty diagram
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the seed diagram shown at session start
    pub fn seed() -> Self {
        let mut diagram = Self::new();

        // The seed is a constant, these inserts cannot fail.
        let _ = diagram.add_node("stateA", "stateA", 100.0, 200.0);
        let _ = diagram.add_node("stateB", "stateB", 200.0, 400.0);
        let _ = diagram.add_edge("stateA-stateB", "stateA", "stateB");

        diagram
    }

    // ========== Node Operations ==========

    /// Add a node to the diagram
    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        x: f32,
        y: f32,
    ) -> Result<()> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(anyhow!("Duplicate node id: {}", id));
        }

        self.log_event(EventType::NodeAdded {
            id: id.clone(),
            x,
            y,
        });

        self.nodes.insert(id.clone(), Node::new(id.clone(), label, x, y));
        self.node_order.push(id);
        Ok(())
    }

    /// Get a node by ID
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Iterate over nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.node_order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Replace a node's position
    ///
    /// The single mutation entry point for positions. An unknown id is a
    /// silent no-op so a stale drag can never crash the interaction loop.
    pub fn set_node_position(&mut self, id: &str, x: f32, y: f32) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        node.set_position(x, y);

        self.log_event(EventType::NodeMoved {
            id: id.to_string(),
            x,
            y,
        });
    }

    // ========== Edge Operations ==========

    /// Add an edge to the diagram
    ///
    /// Endpoints are not required to exist yet; an edge with a dangling
    /// endpoint simply resolves to no geometry.
    pub fn add_edge(
        &mut self,
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<()> {
        self.insert_edge(Edge::new(id, from, to))
    }

    /// Add a labeled edge to the diagram
    pub fn add_labeled_edge(
        &mut self,
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<()> {
        self.insert_edge(Edge::new(id, from, to).with_label(label))
    }

    fn insert_edge(&mut self, edge: Edge) -> Result<()> {
        if self.edges.contains_key(&edge.id) {
            return Err(anyhow!("Duplicate edge id: {}", edge.id));
        }
        if edge.from == edge.to {
            return Err(anyhow!("Cannot create self-referential edge: {}", edge.id));
        }

        self.log_event(EventType::EdgeAdded {
            id: edge.id.clone(),
            from: edge.from.clone(),
            to: edge.to.clone(),
        });

        self.edge_order.push(edge.id.clone());
        self.edges.insert(edge.id.clone(), edge);
        Ok(())
    }

    /// Get an edge by ID
    pub fn get_edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Iterate over edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edge_order.iter().filter_map(|id| self.edges.get(id))
    }

    /// Get all edges starting from a node
    pub fn outgoing_edges(&self, node_id: &str) -> Vec<&Edge> {
        self.edges().filter(|e| e.starts_from(node_id)).collect()
    }

    /// Get all edges ending at a node
    pub fn incoming_edges(&self, node_id: &str) -> Vec<&Edge> {
        self.edges().filter(|e| e.ends_at(node_id)).collect()
    }

    // ========== Event Logging ==========

    /// Log an event
    fn log_event(&mut self, event: EventType) {
        self.events.push(DiagramEvent::new(event));
    }

    /// Get all events
    pub fn events(&self) -> &[DiagramEvent] {
        &self.events
    }

    /// Clear event log
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    // ========== Utility Methods ==========

    /// Count nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Count edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
