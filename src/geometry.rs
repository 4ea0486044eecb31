use crate::{BoundingBox, Diagram, Edge, Point};
use std::collections::HashMap;

/// Strategy for deriving an edge's visual endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndpointMode {
    /// Endpoints are the two node centers. Pure function of store data,
    /// works before the first paint.
    #[default]
    Center,

    /// Start at the bottom-center of the source node's rendered box, end at
    /// the top-center of the destination's. Requires measured boxes.
    Boundary,
}

/// Port for querying rendered node boxes
///
/// A box exists only after the node has been laid out at least once, so
/// implementations return `None` until then. Keeping this behind a trait
/// lets tests resolve geometry against synthetic boxes.
pub trait LayoutQuery {
    fn node_box(&self, node_id: &str) -> Option<BoundingBox>;
}

impl LayoutQuery for HashMap<String, BoundingBox> {
    fn node_box(&self, node_id: &str) -> Option<BoundingBox> {
        self.get(node_id).copied()
    }
}

/// Layout query with no measured boxes; for center-mode callers
#[derive(Debug, Clone, Copy, Default)]
pub struct UnmeasuredLayout;

impl LayoutQuery for UnmeasuredLayout {
    fn node_box(&self, _node_id: &str) -> Option<BoundingBox> {
        None
    }
}

/// Resolved visual geometry for one edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeGeometry {
    pub start: Point,
    pub end: Point,
}

impl EdgeGeometry {
    /// Anchor point for the edge label
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Axis-aligned rectangle spanned by the two endpoints
    ///
    /// Degenerates to zero width or height for axis-aligned edges; that is
    /// a valid box and its center stays finite.
    pub fn label_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            (self.start.x - self.end.x).abs(),
            (self.start.y - self.end.y).abs(),
        )
    }
}

/// Derives edge endpoints from the current store state
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryResolver {
    mode: EndpointMode,
}

impl GeometryResolver {
    /// Create a resolver with the given endpoint mode
    pub fn new(mode: EndpointMode) -> Self {
        Self { mode }
    }

    /// The active endpoint mode
    pub fn mode(&self) -> EndpointMode {
        self.mode
    }

    /// Switch endpoint mode
    pub fn set_mode(&mut self, mode: EndpointMode) {
        self.mode = mode;
    }

    /// Resolve an edge's visual geometry
    ///
    /// Returns `None` when an endpoint node is unknown, or in boundary mode
    /// when either rendered box has not been measured yet. Callers skip
    /// drawing such edges and re-resolve on the next render.
    pub fn resolve(
        &self,
        diagram: &Diagram,
        edge: &Edge,
        layout: &dyn LayoutQuery,
    ) -> Option<EdgeGeometry> {
        let from = diagram.get_node(&edge.from)?;
        let to = diagram.get_node(&edge.to)?;

        match self.mode {
            EndpointMode::Center => Some(EdgeGeometry {
                start: from.position(),
                end: to.position(),
            }),
            EndpointMode::Boundary => {
                let from_box = layout.node_box(&edge.from)?;
                let to_box = layout.node_box(&edge.to)?;
                Some(EdgeGeometry {
                    start: from_box.bottom_center(),
                    end: to_box.top_center(),
                })
            }
        }
    }

    /// Resolve an edge by id
    pub fn resolve_by_id(
        &self,
        diagram: &Diagram,
        edge_id: &str,
        layout: &dyn LayoutQuery,
    ) -> Option<EdgeGeometry> {
        let edge = diagram.get_edge(edge_id)?;
        self.resolve(diagram, edge, layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_resolver(mode: EndpointMode) -> (Diagram, GeometryResolver) {
        (Diagram::seed(), GeometryResolver::new(mode))
    }

    #[test]
    fn test_center_mode_endpoints() {
        let (diagram, resolver) = seed_resolver(EndpointMode::Center);

        let geometry = resolver
            .resolve_by_id(&diagram, "stateA-stateB", &UnmeasuredLayout)
            .unwrap();

        assert_eq!(geometry.start, Point::new(100.0, 200.0));
        assert_eq!(geometry.end, Point::new(200.0, 400.0));
        assert_eq!(geometry.midpoint(), Point::new(150.0, 300.0));
    }

    #[test]
    fn test_label_box_spans_endpoints() {
        let (diagram, resolver) = seed_resolver(EndpointMode::Center);

        let geometry = resolver
            .resolve_by_id(&diagram, "stateA-stateB", &UnmeasuredLayout)
            .unwrap();
        let label_box = geometry.label_box();

        assert_eq!(label_box, BoundingBox::new(100.0, 200.0, 100.0, 200.0));
    }

    #[test]
    fn test_degenerate_label_box() {
        let mut diagram = Diagram::new();
        diagram.add_node("left", "L", 0.0, 50.0).unwrap();
        diagram.add_node("right", "R", 300.0, 50.0).unwrap();
        diagram.add_edge("lr", "left", "right").unwrap();

        let resolver = GeometryResolver::new(EndpointMode::Center);
        let geometry = resolver
            .resolve_by_id(&diagram, "lr", &UnmeasuredLayout)
            .unwrap();

        let label_box = geometry.label_box();
        assert_eq!(label_box.height, 0.0);

        // A flat box still centers the label correctly
        let center = label_box.center();
        assert!(center.x.is_finite() && center.y.is_finite());
        assert_eq!(center, Point::new(150.0, 50.0));
    }

    #[test]
    fn test_dangling_edge_resolves_to_none() {
        let mut diagram = Diagram::seed();
        diagram.add_edge("bad", "stateA", "missing").unwrap();

        let resolver = GeometryResolver::new(EndpointMode::Center);
        assert!(resolver
            .resolve_by_id(&diagram, "bad", &UnmeasuredLayout)
            .is_none());
    }

    #[test]
    fn test_unknown_edge_resolves_to_none() {
        let (diagram, resolver) = seed_resolver(EndpointMode::Center);

        assert!(resolver
            .resolve_by_id(&diagram, "no-such-edge", &UnmeasuredLayout)
            .is_none());
    }

    #[test]
    fn test_boundary_mode_before_measurement() {
        let (diagram, resolver) = seed_resolver(EndpointMode::Boundary);

        // No boxes measured yet: a normal transient state, not an error
        assert!(resolver
            .resolve_by_id(&diagram, "stateA-stateB", &UnmeasuredLayout)
            .is_none());

        // One box is not enough
        let mut layout = HashMap::new();
        layout.insert(
            "stateA".to_string(),
            BoundingBox::centered_at(Point::new(100.0, 200.0), 80.0, 40.0),
        );
        assert!(resolver
            .resolve_by_id(&diagram, "stateA-stateB", &layout)
            .is_none());
    }

    #[test]
    fn test_boundary_mode_endpoints() {
        let (diagram, resolver) = seed_resolver(EndpointMode::Boundary);

        let mut layout = HashMap::new();
        layout.insert(
            "stateA".to_string(),
            BoundingBox::centered_at(Point::new(100.0, 200.0), 80.0, 40.0),
        );
        layout.insert(
            "stateB".to_string(),
            BoundingBox::centered_at(Point::new(200.0, 400.0), 80.0, 40.0),
        );

        let geometry = resolver
            .resolve_by_id(&diagram, "stateA-stateB", &layout)
            .unwrap();

        // Bottom-center of the source box, top-center of the destination box
        assert_eq!(geometry.start, Point::new(100.0, 220.0));
        assert_eq!(geometry.end, Point::new(200.0, 380.0));
    }

    #[test]
    fn test_boundary_mode_follows_moved_box() {
        let (mut diagram, resolver) = seed_resolver(EndpointMode::Boundary);

        let mut layout = HashMap::new();
        layout.insert(
            "stateA".to_string(),
            BoundingBox::centered_at(Point::new(100.0, 200.0), 80.0, 40.0),
        );
        layout.insert(
            "stateB".to_string(),
            BoundingBox::centered_at(Point::new(200.0, 400.0), 80.0, 40.0),
        );

        let before = resolver
            .resolve_by_id(&diagram, "stateA-stateB", &layout)
            .unwrap();

        // Node moves, box gets re-measured, geometry must follow
        diagram.set_node_position("stateA", 160.0, 260.0);
        layout.insert(
            "stateA".to_string(),
            BoundingBox::centered_at(Point::new(160.0, 260.0), 80.0, 40.0),
        );

        let after = resolver
            .resolve_by_id(&diagram, "stateA-stateB", &layout)
            .unwrap();

        assert_ne!(before.start, after.start);
        assert_eq!(after.start, Point::new(160.0, 280.0));
        assert_eq!(after.end, before.end);
    }
}
