//! Directional collision detection.
//!
//! Entities that need to know *which side* a collision happened on (the hero,
//! enemies, hazard tiles) carry a [`SideBounds`]: four sub-rectangles of the
//! full bounding box, one per side. A plain AABB overlap says "we touched";
//! the side whose sub-rect overlaps says "from where", which drives movement
//! blocking and hazard damage.
//!
//! The detector is read-only. Callers decide what to mutate in response.

use crate::geom::{overlaps, Rect};

// Percentage split of the owner's box into side regions. The top/bottom
// halves are wide and the left/right strips are thin and inset, so a falling
// entity clipping a corner reads as a vertical hit rather than a wall hit.
const TOP_X_OFFSET: f32 = 0.25;
const TOP_WIDTH: f32 = 0.5;
const TOP_HEIGHT: f32 = 0.5;

const BOTTOM_X_OFFSET: f32 = 0.25;
const BOTTOM_Y_OFFSET: f32 = 0.5;
const BOTTOM_WIDTH: f32 = 0.5;
const BOTTOM_HEIGHT: f32 = 0.5;

const LEFT_Y_OFFSET: f32 = 0.1;
const LEFT_WIDTH: f32 = 0.15;
const LEFT_HEIGHT: f32 = 0.8;

const RIGHT_X_OFFSET: f32 = 0.75;
const RIGHT_Y_OFFSET: f32 = 0.1;
const RIGHT_WIDTH: f32 = 0.15;
const RIGHT_HEIGHT: f32 = 0.8;

/// Which side of an entity a collision was classified on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Four directional sub-rectangles of an entity's bounding box.
///
/// Recomputed via [`SideBounds::update`] whenever the owner moves or
/// resizes. Hazard tiles overwrite `top`/`bottom` with shape-specific
/// regions after construction.
#[derive(Debug, Clone, Copy)]
pub struct SideBounds {
    pub top: Rect,
    pub bottom: Rect,
    pub left: Rect,
    pub right: Rect,
}

impl SideBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut bounds = Self {
            top: Rect::default(),
            bottom: Rect::default(),
            left: Rect::default(),
            right: Rect::default(),
        };
        bounds.update(x, y, width, height);
        bounds
    }

    /// Recompute all four regions from the owner's current box.
    pub fn update(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.top.set(
            x + TOP_X_OFFSET * width,
            y,
            TOP_WIDTH * width,
            TOP_HEIGHT * height,
        );
        self.bottom.set(
            x + BOTTOM_X_OFFSET * width,
            y + BOTTOM_Y_OFFSET * height,
            BOTTOM_WIDTH * width,
            BOTTOM_HEIGHT * height,
        );
        self.left.set(
            x,
            y + LEFT_Y_OFFSET * height,
            LEFT_WIDTH * width,
            LEFT_HEIGHT * height,
        );
        self.right.set(
            x + RIGHT_X_OFFSET * width,
            y + RIGHT_Y_OFFSET * height,
            RIGHT_WIDTH * width,
            RIGHT_HEIGHT * height,
        );
    }

    pub fn top_hits(&self, other: &Rect) -> bool {
        overlaps(&self.top, other)
    }

    pub fn bottom_hits(&self, other: &Rect) -> bool {
        overlaps(&self.bottom, other)
    }

    pub fn left_hits(&self, other: &Rect) -> bool {
        overlaps(&self.left, other)
    }

    pub fn right_hits(&self, other: &Rect) -> bool {
        overlaps(&self.right, other)
    }

    /// Classify a collision with `other` by side.
    ///
    /// Evaluation order is top, bottom, right, left and only the first hit
    /// wins. An entity touching on two sides in the same tick resolves just
    /// the higher-priority side that tick — an accepted approximation, not
    /// multi-side physics.
    pub fn hit_side(&self, other: &Rect) -> Option<Side> {
        if self.top_hits(other) {
            Some(Side::Top)
        } else if self.bottom_hits(other) {
            Some(Side::Bottom)
        } else if self.right_hits(other) {
            Some(Side::Right)
        } else if self.left_hits(other) {
            Some(Side::Left)
        } else {
            None
        }
    }
}
