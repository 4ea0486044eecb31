use crate::{Diagram, LayoutQuery, Point};

/// State of the pointer gesture machine
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,

    /// One in-progress press-move-release gesture
    Dragging {
        /// Node being dragged
        node_id: String,

        /// Pointer-to-anchor offset captured at press, frozen for the
        /// whole gesture
        offset_x: f32,
        offset_y: f32,
    },
}

/// Converts pointer gestures into position writes on the diagram store
///
/// Each move recomputes the position from the frozen grab offset, never
/// from a delta against the previous move, so the node stays locked to the
/// pointer without accumulating rounding drift.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create a controller in the idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture state
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Whether a gesture is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The node held by the active gesture, if any
    pub fn dragging_node(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { node_id, .. } => Some(node_id),
            DragState::Idle => None,
        }
    }

    /// Begin a gesture on a node
    ///
    /// The anchor is the center of the node's rendered box; before the
    /// first paint no box exists and the stored position stands in for it
    /// (rendered boxes are centered on the stored position anyway).
    ///
    /// Returns whether a session started. A press on an unknown node does
    /// nothing, and a press while a gesture is already active is ignored:
    /// the active session keeps its node and offset.
    pub fn pointer_down(
        &mut self,
        diagram: &Diagram,
        layout: &dyn LayoutQuery,
        node_id: &str,
        pointer: Point,
    ) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(node) = diagram.get_node(node_id) else {
            return false;
        };

        let anchor = layout
            .node_box(node_id)
            .map(|b| b.center())
            .unwrap_or_else(|| node.position());

        self.state = DragState::Dragging {
            node_id: node_id.to_string(),
            offset_x: pointer.x - anchor.x,
            offset_y: pointer.y - anchor.y,
        };
        true
    }

    /// Apply a pointer move
    ///
    /// Writes the node's new position through the store. A move while idle
    /// is a no-op; after release no further moves can touch the node until
    /// a new press.
    pub fn pointer_move(&mut self, diagram: &mut Diagram, pointer: Point) {
        let DragState::Dragging {
            node_id,
            offset_x,
            offset_y,
        } = &self.state
        else {
            return;
        };

        diagram.set_node_position(node_id, pointer.x - offset_x, pointer.y - offset_y);
    }

    /// End the gesture
    ///
    /// Returns the id of the released node. Releasing while idle is a safe
    /// no-op, so every exit path may call this without double-release
    /// hazards.
    pub fn pointer_up(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging { node_id, .. } => Some(node_id),
            DragState::Idle => None,
        }
    }

    /// Abnormal-teardown path (e.g. the dragged node's widget disappears
    /// mid-gesture); identical semantics to `pointer_up`
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
