//! Small geometry value types shared by text and table layout.

/// An axis-aligned rectangle in element-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f32 {
        self.y + self.h
    }

    /// Check whether a point lies inside this rectangle.
    ///
    /// Left/top edges are inclusive, right/bottom exclusive, so adjacent
    /// cells never both claim a point on their shared border.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.max_x() && point.y >= self.y && point.y < self.max_y()
    }
}

/// A 2D point in element-local coordinates.
///
/// Coordinates are relative to the top-left corner of the laid-out element,
/// not absolute canvas coordinates, so hit testing works regardless of where
/// the element sits on the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
