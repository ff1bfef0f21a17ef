//! Runtime tuning, loaded from a RON file next to the binary.
//!
//! Everything here has a sensible default so a missing or broken file
//! never blocks the game from starting.

use std::path::Path;

use macroquad::prelude::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::world::DEFAULT_KILL_PLANE_Y;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub level_path: String,
    /// Longest wall-clock slice fed to the simulation in one frame, in
    /// seconds. Caps the tick burst after a stall.
    pub max_step: f64,
    pub kill_plane_y: f32,
    /// Camera dead-zone margins as fractions of the view size.
    pub camera_deadzone_x: f32,
    pub camera_deadzone_y: f32,
    /// Draw collision rectangles over the sprites.
    pub show_hitboxes: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            level_path: "assets/levels/level1.txt".to_string(),
            max_step: 0.05,
            kill_plane_y: DEFAULT_KILL_PLANE_Y,
            camera_deadzone_x: 0.3,
            camera_deadzone_y: 0.3,
            show_hitboxes: false,
        }
    }
}

impl Tuning {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&text)?)
    }

    /// Load the tuning file, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(err) => {
                warn!("using default tuning ({}): {}", path.display(), err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let t = Tuning::default();
        assert_eq!(t.max_step, 0.05);
        assert_eq!(t.kill_plane_y, DEFAULT_KILL_PLANE_Y);
        assert!(!t.show_hitboxes);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let t: Tuning = ron::from_str("(show_hitboxes: true)").unwrap();
        assert!(t.show_hitboxes);
        assert_eq!(t.max_step, 0.05);
        assert_eq!(t.level_path, "assets/levels/level1.txt");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let t = Tuning::load_or_default(Path::new("no/such/tuning.ron"));
        assert_eq!(t.kill_plane_y, DEFAULT_KILL_PLANE_Y);
    }

    #[test]
    fn test_garbage_file_reports_parse_error() {
        let err = match ron::from_str::<Tuning>("(max_step: \"fast\")") {
            Err(e) => ConfigError::Parse(e),
            Ok(_) => panic!("expected a parse error"),
        };
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
