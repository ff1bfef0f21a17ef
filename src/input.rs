//! Per-tick input snapshot.
//!
//! The world never touches macroquad's input API directly: the main loop
//! polls once per tick and hands the hero a plain struct. Tests build
//! snapshots by hand.

use macroquad::prelude::*;

/// Read-only input state for one tick. Aim coordinates are in world space.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Primary fire (rocket).
    pub primary: bool,
    /// Secondary fire (flame stream).
    pub secondary: bool,
    pub aim_x: f32,
    pub aim_y: f32,
}

impl InputSnapshot {
    /// Poll the current device state. `view` is the camera's top-left world
    /// offset, used to translate the mouse into world coordinates.
    pub fn poll(view: (f32, f32)) -> Self {
        let (mouse_x, mouse_y) = mouse_position();
        Self {
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            jump: is_key_down(KeyCode::Space),
            primary: is_mouse_button_down(MouseButton::Left),
            secondary: is_mouse_button_down(MouseButton::Right),
            aim_x: mouse_x + view.0,
            aim_y: mouse_y + view.1,
        }
    }
}
