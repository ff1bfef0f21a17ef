//! Scrolling camera with a dead zone.
//!
//! The view only scrolls when the target pushes past the dead-zone margin,
//! and never shows anything outside the level bounds.

use crate::geom::Rect;

pub struct Camera {
    /// World position of the view's top-left corner.
    pub x: f32,
    pub y: f32,
    view_width: f32,
    view_height: f32,
    /// Dead-zone margins in pixels, derived from view-size fractions.
    margin_x: f32,
    margin_y: f32,
}

impl Camera {
    pub fn new(view_width: f32, view_height: f32, deadzone_x: f32, deadzone_y: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            view_width,
            view_height,
            margin_x: deadzone_x * view_width,
            margin_y: deadzone_y * view_height,
        }
    }

    /// Scroll so `target` stays inside the dead zone, clamped to `world`.
    pub fn follow(&mut self, target: &Rect, world: &Rect) {
        if target.x - self.x < self.margin_x {
            self.x = target.x - self.margin_x;
        } else if target.right() - self.x > self.view_width - self.margin_x {
            self.x = target.right() - (self.view_width - self.margin_x);
        }

        if target.y - self.y < self.margin_y {
            self.y = target.y - self.margin_y;
        } else if target.bottom() - self.y > self.view_height - self.margin_y {
            self.y = target.bottom() - (self.view_height - self.margin_y);
        }

        // Never scroll past the level edges. A level smaller than the view
        // pins to its top-left corner.
        let max_x = (world.right() - self.view_width).max(world.x);
        let max_y = (world.bottom() - self.view_height).max(world.y);
        self.x = self.x.clamp(world.x, max_x);
        self.y = self.y.clamp(world.y, max_y);
    }

    /// Top-left world offset, for translating draw calls and the mouse.
    pub fn view_offset(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(1000.0, 750.0, 0.3, 0.3)
    }

    #[test]
    fn test_target_inside_dead_zone_does_not_scroll() {
        let mut cam = camera();
        let world = Rect::new(0.0, 0.0, 5000.0, 5000.0);
        cam.follow(&Rect::new(450.0, 350.0, 50.0, 90.0), &world);
        assert_eq!((cam.x, cam.y), (0.0, 0.0));
    }

    #[test]
    fn test_target_past_margin_drags_the_view() {
        let mut cam = camera();
        let world = Rect::new(0.0, 0.0, 5000.0, 5000.0);
        cam.follow(&Rect::new(900.0, 350.0, 50.0, 90.0), &world);
        // Right edge of the target sits exactly on the dead-zone margin.
        assert_eq!(cam.x, 950.0 - 700.0);
        assert_eq!(cam.y, 0.0);
    }

    #[test]
    fn test_view_clamps_to_world_edges() {
        let mut cam = camera();
        let world = Rect::new(0.0, 0.0, 1200.0, 800.0);
        cam.follow(&Rect::new(1150.0, 750.0, 50.0, 50.0), &world);
        assert_eq!(cam.x, 200.0);
        assert_eq!(cam.y, 50.0);
    }

    #[test]
    fn test_small_world_pins_to_corner() {
        let mut cam = camera();
        let world = Rect::new(0.0, 0.0, 500.0, 400.0);
        cam.follow(&Rect::new(400.0, 300.0, 50.0, 50.0), &world);
        assert_eq!((cam.x, cam.y), (0.0, 0.0));
    }
}
