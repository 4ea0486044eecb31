// Helper functions to build test diagrams with various configurations

use diagram_editor::{BoundingBox, Diagram, Point};
use std::collections::HashMap;

/// The two-node seed diagram: stateA (100, 200) → stateB (200, 400)
pub fn seed_diagram() -> Diagram {
    Diagram::seed()
}

/// Synthetic rendered layout for the seed diagram, boxes centered on the
/// stored node positions
pub fn seed_layout() -> HashMap<String, BoundingBox> {
    let mut layout = HashMap::new();
    layout.insert(
        "stateA".to_string(),
        BoundingBox::centered_at(Point::new(100.0, 200.0), 80.0, 40.0),
    );
    layout.insert(
        "stateB".to_string(),
        BoundingBox::centered_at(Point::new(200.0, 400.0), 80.0, 40.0),
    );
    layout
}

/// A diagram with a horizontal edge (both nodes at the same y), for
/// degenerate label-box cases
pub fn horizontal_diagram() -> Diagram {
    let mut diagram = Diagram::new();
    diagram.add_node("left", "Left", 0.0, 120.0).unwrap();
    diagram.add_node("right", "Right", 360.0, 120.0).unwrap();
    diagram
        .add_labeled_edge("left-right", "left", "right", "flows")
        .unwrap();
    diagram
}

/// The seed diagram plus an edge whose destination does not exist
pub fn dangling_edge_diagram() -> Diagram {
    let mut diagram = Diagram::seed();
    diagram.add_edge("into-the-void", "stateA", "stateC").unwrap();
    diagram
}
