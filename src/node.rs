use serde::{Deserialize, Serialize};

/// A labeled, positioned node in the diagram
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    /// Unique, stable identifier
    pub id: String,

    /// Text shown inside the node's box
    pub label: String,

    /// Center position on the canvas (pixels)
    pub x: f32,

    /// Center position on the canvas (pixels)
    pub y: f32,
}

impl Node {
    /// Create a new node centered at the given position
    pub fn new(id: impl Into<String>, label: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x,
            y,
        }
    }

    /// The node's center as a point
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Replace the node's position
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}

/// A point on the canvas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; used for rendered node boxes and edge label boxes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// Create a new bounding box from its top-left corner and size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a bounding box of the given size centered on a point
    pub fn centered_at(center: Point, width: f32, height: f32) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    /// Get the right edge of the box
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge of the box
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get the center of the box
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Midpoint of the top edge
    pub fn top_center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y)
    }

    /// Midpoint of the bottom edge
    pub fn bottom_center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.bottom())
    }

    /// Check if this box contains a point
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}
