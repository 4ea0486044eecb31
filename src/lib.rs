// Diagram Editor - Core Library

pub mod diagram;
pub mod drag;
pub mod edge;
pub mod event;
pub mod geometry;
pub mod node;
pub mod ui;

// Re-export main types for convenience
pub use diagram::Diagram;
pub use drag::{DragController, DragState};
pub use edge::Edge;
pub use event::{DiagramEvent, EventType};
pub use geometry::{EdgeGeometry, EndpointMode, GeometryResolver, LayoutQuery, UnmeasuredLayout};
pub use node::{BoundingBox, Node, Point};
pub use ui::DiagramEditorApp;
