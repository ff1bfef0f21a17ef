//! Texture loading.
//!
//! Textures are looked up by short name. A missing file is logged and
//! counted, and the renderer falls back to flat-color shapes for it, so
//! the game stays playable without any art on disk.

use std::collections::HashMap;

use macroquad::prelude::*;

/// Every texture the renderer may ask for.
pub const TEXTURE_NAMES: &[&str] = &[
    "hero_idle",
    "hero_walk",
    "hero_jump",
    "hero_shoot",
    "enemy",
    "floor",
    "bricks",
    "gap_left",
    "gap_right",
    "steel_block",
    "spikes_floating",
    "spikes_block",
    "spikes_floor",
    "rocket",
    "flame",
    "explosion",
    "health_pack",
    "mana_pack",
    "goal",
    "checkpoint",
];

pub struct Assets {
    textures: HashMap<String, Texture2D>,
    /// Textures that failed to load this run.
    pub failed: u32,
}

impl Assets {
    pub async fn load() -> Self {
        let mut textures = HashMap::new();
        let mut failed = 0;
        for name in TEXTURE_NAMES {
            let path = format!("assets/textures/{name}.png");
            match load_texture(&path).await {
                Ok(texture) => {
                    texture.set_filter(FilterMode::Nearest);
                    textures.insert((*name).to_string(), texture);
                }
                Err(err) => {
                    failed += 1;
                    warn!("texture {} unavailable: {}", path, err);
                }
            }
        }
        if failed == 0 {
            build_textures_atlas();
        }
        Self { textures, failed }
    }

    pub fn get(&self, name: &str) -> Option<&Texture2D> {
        self.textures.get(name)
    }
}
