/// A point in screen space, in terminal cell units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The center of the terminal cell at `(column, row)`.
    ///
    /// Pointer events are reported per cell, so a click is taken to land in
    /// the middle of the cell and never on a rectangle edge.
    pub fn cell_center(column: u16, row: u16) -> Self {
        Self {
            x: f32::from(column) + 0.5,
            y: f32::from(row) + 0.5,
        }
    }
}

/// Axis-aligned rectangle used both for drawing and as a hit region.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Open-interval containment: a point exactly on any edge is outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x > self.left && p.x < self.right && p.y > self.top && p.y < self.bottom
    }
}
