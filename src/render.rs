//! World drawing.
//!
//! One draw call per entity, translated by the camera offset. Any texture
//! that failed to load degrades to a flat-color rectangle of the entity's
//! size, so collision geometry stays visible either way.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::camera::Camera;
use crate::entity::{Entity, EntityData, Facing, HazardShape, PlatformStyle};
use crate::hero::HeroAction;
use crate::projectile::ShotKind;
use crate::world::World;

/// How much bigger than the rocket the explosion is drawn.
const EXPLOSION_SCALE: f32 = 3.0;

pub fn draw_world(world: &World, assets: &Assets, camera: &Camera, show_hitboxes: bool) {
    let (off_x, off_y) = camera.view_offset();
    for ent in &world.entities {
        draw_entity(ent, assets, off_x, off_y, show_hitboxes);
        if show_hitboxes {
            draw_rectangle_lines(
                ent.x - off_x,
                ent.y - off_y,
                ent.width,
                ent.height,
                1.0,
                RED,
            );
        }
    }
}

fn draw_entity(ent: &Entity, assets: &Assets, off_x: f32, off_y: f32, show_hitboxes: bool) {
    let x = ent.x - off_x;
    let y = ent.y - off_y;
    let (w, h) = (ent.width, ent.height);
    match &ent.data {
        EntityData::Hero(hero) => {
            let name = match hero.action() {
                HeroAction::Idle => "hero_idle",
                HeroAction::Walking => "hero_walk",
                HeroAction::Jumping => "hero_jump",
                HeroAction::Shooting => "hero_shoot",
            };
            let flip = hero.facing == Facing::Left;
            draw_sprite(assets, name, x, y, w, h, flip, 0.0, SKYBLUE);
        }
        EntityData::Enemy(enemy) => {
            let flip = enemy.facing == Facing::Right;
            draw_sprite(assets, "enemy", x, y, w, h, flip, 0.0, MAROON);
        }
        EntityData::Platform(style) => {
            let name = match style {
                PlatformStyle::Floor => "floor",
                PlatformStyle::Bricks => "bricks",
                PlatformStyle::GapLeft => "gap_left",
                PlatformStyle::GapRight => "gap_right",
                PlatformStyle::SteelBlock => "steel_block",
            };
            draw_sprite(assets, name, x, y, w, h, false, 0.0, DARKGRAY);
        }
        EntityData::Projectile(p) => {
            if p.exploding {
                let size = w * EXPLOSION_SCALE;
                let cx = x + w / 2.0;
                let cy = y + h / 2.0;
                match assets.get("explosion") {
                    Some(tex) => draw_texture_ex(
                        tex,
                        cx - size / 2.0,
                        cy - size / 2.0,
                        WHITE,
                        DrawTextureParams {
                            dest_size: Some(vec2(size, size)),
                            ..Default::default()
                        },
                    ),
                    None => draw_circle(cx, cy, size / 2.0, ORANGE),
                }
            } else {
                let (name, rotation, fallback) = match p.kind {
                    ShotKind::Rocket => ("rocket", p.path.current_angle(), YELLOW),
                    ShotKind::Flame => ("flame", 0.0, ORANGE),
                };
                draw_sprite(assets, name, x, y, w, h, false, rotation, fallback);
            }
        }
        EntityData::HealthPickup => {
            draw_sprite(assets, "health_pack", x, y, w, h, false, 0.0, GREEN);
        }
        EntityData::ManaPickup => {
            draw_sprite(assets, "mana_pack", x, y, w, h, false, 0.0, BLUE);
        }
        EntityData::Goal => {
            draw_sprite(assets, "goal", x, y, w, h, false, 0.0, GOLD);
        }
        EntityData::Checkpoint => {
            draw_sprite(assets, "checkpoint", x, y, w, h, false, 0.0, LIGHTGRAY);
        }
        EntityData::Hazard(hazard) => {
            let name = match hazard.shape {
                HazardShape::Floating => "spikes_floating",
                HazardShape::Block => "spikes_block",
                HazardShape::Floor => "spikes_floor",
            };
            draw_sprite(assets, name, x, y, w, h, false, 0.0, GRAY);
        }
        EntityData::InvisibleBarrier => {
            // Only the debug overlay reveals these.
            if show_hitboxes {
                draw_rectangle_lines(x, y, w, h, 2.0, PURPLE);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_sprite(
    assets: &Assets,
    name: &str,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    flip_x: bool,
    rotation: f32,
    fallback: Color,
) {
    match assets.get(name) {
        Some(texture) => draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                rotation,
                flip_x,
                ..Default::default()
            },
        ),
        None => draw_rectangle(x, y, w, h, fallback),
    }
}
