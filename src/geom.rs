//! Axis-aligned rectangle primitive.
//!
//! Used for entity bounding boxes, the directional collision sub-regions,
//! the camera viewport, and the world boundary. Bounds are mutable and
//! re-derived from their owner's position every tick.

/// Axis-aligned rectangle. Invariant: width and height are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Move and resize in one call.
    pub fn set(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    /// True if `self` lies fully inside `outer`.
    pub fn within(&self, outer: &Rect) -> bool {
        outer.x <= self.x
            && outer.right() >= self.right()
            && outer.y <= self.y
            && outer.bottom() >= self.bottom()
    }
}

/// AABB overlap test.
///
/// The lower y bound uses strict `<` while every other edge uses `>=` / `<=`.
/// The asymmetry is deliberate: an entity resting exactly on top of another
/// counts as touching from above but not from below, which decides the tick
/// on which a falling entity lands. Callers depend on this tie-break.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x + a.width >= b.x
        && a.x <= b.x + b.width
        && a.y + a.height >= b.y
        && a.y < b.y + b.height
}
