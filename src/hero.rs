//! The player-controlled hero.
//!
//! Owns health/mana, jump/gravity state, the hazard-hit cooldown, the last
//! checkpoint, and a [`SideBounds`] for directional collision. Reacts to
//! collisions through a fixed kind-keyed dispatch table and reads one input
//! snapshot per tick.

use crate::collision::{Side, SideBounds};
use crate::entity::{
    Entity, EntityData, Facing, Kind, HEALTH_PICKUP_VALUE, MANA_PICKUP_VALUE,
};
use crate::geom::{overlaps, Rect};
use crate::input::InputSnapshot;
use crate::projectile;
use crate::world::World;

pub const MAX_HP: f32 = 100.0;
pub const MAX_MP: f32 = 100.0;
/// Horizontal walk speed, px per tick.
pub const WALK_SPEED: f32 = 7.0;
/// Downward acceleration added to vertical speed each tick.
pub const GRAVITY: f32 = 1.0;
/// Initial upward speed of a jump (negative y is up).
pub const JUMP_IMPULSE: f32 = -25.0;
/// Minimum ticks between hazard/contact damage applications.
pub const HIT_COOLDOWN: u32 = 60;
/// Damage from touching an enemy.
pub const ENEMY_CONTACT_DAMAGE: f32 = 20.0;

const SPRITE_SCALE: f32 = 0.25;
pub const WIDTH: f32 = 191.0 * SPRITE_SCALE;
pub const HEIGHT: f32 = 351.0 * SPRITE_SCALE;

// Muzzle offsets within the sprite, per shot kind.
const ROCKET_MUZZLE_X: f32 = 180.0 * SPRITE_SCALE;
const ROCKET_MUZZLE_Y: f32 = 145.0 * SPRITE_SCALE;
const FLAME_MUZZLE_X: f32 = 160.0 * SPRITE_SCALE;
const FLAME_MUZZLE_Y: f32 = 140.0 * SPRITE_SCALE;

/// How far ahead the victory auto-fire aims.
const CELEBRATION_RANGE: f32 = 500.0;

/// Visual state tag the renderer reads. Core logic never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroAction {
    Idle,
    Walking,
    Jumping,
    Shooting,
}

#[derive(Debug, Clone)]
pub struct Hero {
    pub hp: f32,
    pub max_hp: f32,
    pub mp: f32,
    pub max_mp: f32,
    /// Passive per-tick regeneration; zero by default.
    pub hp_regen: f32,
    pub mp_regen: f32,
    pub facing: Facing,
    /// Vertical speed, positive downward.
    pub vertical_accel: f32,
    /// True while standing on something; permits jumping.
    pub grounded: bool,
    pub jumping: bool,
    pub walking: bool,
    pub shooting: bool,
    /// Terminal state after touching the goal: input is ignored.
    pub won: bool,
    /// Respawn position, updated by checkpoint tiles.
    pub checkpoint: (f32, f32),
    /// Ticks since the last hazard/contact hit; starts elapsed so the
    /// first hit always lands.
    pub ticks_since_hit: u32,
    pub ticks_since_shot: u32,
    pub bounds: SideBounds,
}

impl Hero {
    /// Adjust HP, clamped to [0, max].
    pub fn change_hp(&mut self, amount: f32) {
        self.hp = (self.hp + amount).clamp(0.0, self.max_hp);
    }

    /// Adjust MP, clamped to [0, max].
    pub fn change_mp(&mut self, amount: f32) {
        self.mp = (self.mp + amount).clamp(0.0, self.max_mp);
    }

    pub fn is_airborne(&self) -> bool {
        self.vertical_accel != 0.0
    }

    pub fn action(&self) -> HeroAction {
        if self.shooting {
            HeroAction::Shooting
        } else if self.jumping {
            HeroAction::Jumping
        } else if self.walking {
            HeroAction::Walking
        } else {
            HeroAction::Idle
        }
    }
}

/// Build the hero entity at a spawn position. The spawn doubles as the
/// initial checkpoint.
pub fn spawn(x: f32, y: f32) -> Entity {
    Entity::new(
        x,
        y,
        WIDTH,
        HEIGHT,
        EntityData::Hero(Hero {
            hp: MAX_HP,
            max_hp: MAX_HP,
            mp: MAX_MP,
            max_mp: MAX_MP,
            hp_regen: 0.0,
            mp_regen: 0.0,
            facing: Facing::Right,
            vertical_accel: 0.0,
            grounded: false,
            jumping: false,
            walking: false,
            shooting: false,
            won: false,
            checkpoint: (x, y),
            ticks_since_hit: HIT_COOLDOWN,
            ticks_since_shot: projectile::ROCKET_FIRE_RATE,
            bounds: SideBounds::new(x, y, WIDTH, HEIGHT),
        }),
    )
}

/// One hero tick: collisions, death check, physics, input, firing.
pub fn update(world: &mut World, i: usize, input: &InputSnapshot) {
    if matches!(&world.entities[i].data, EntityData::Hero(h) if h.won) {
        celebrate(world, i);
        return;
    }

    scan_collisions(world, i);
    check_death(world, i);

    let mut shot: Option<Entity> = None;
    {
        let ent = &mut world.entities[i];
        let (width, height) = (ent.width, ent.height);
        let Entity { x, y, data, .. } = ent;
        let EntityData::Hero(hero) = data else { return };

        // Moving vertically means we are not standing on anything.
        if hero.is_airborne() {
            hero.grounded = false;
        }
        *y += hero.vertical_accel;
        hero.vertical_accel += GRAVITY;

        if !hero.jumping && hero.grounded && input.jump {
            hero.jumping = true;
            hero.grounded = false;
            hero.vertical_accel = JUMP_IMPULSE;
        }

        hero.walking = input.left || input.right;
        if hero.walking {
            hero.facing = if input.right {
                Facing::Right
            } else {
                Facing::Left
            };
            *x += WALK_SPEED * hero.facing.sign();
        }

        hero.shooting = input.primary || input.secondary;
        let carry = if hero.walking {
            WALK_SPEED * hero.facing.sign()
        } else {
            0.0
        };
        let aim_right = input.aim_x > *x + width / 2.0;
        if input.primary {
            if hero.ticks_since_shot >= projectile::ROCKET_FIRE_RATE
                && hero.mp >= projectile::ROCKET_MANA_COST
            {
                let start_x = if aim_right { *x + ROCKET_MUZZLE_X } else { *x };
                let start_y = *y + ROCKET_MUZZLE_Y;
                shot = Some(projectile::rocket(
                    start_x,
                    start_y,
                    input.aim_x,
                    input.aim_y,
                    carry,
                    true,
                ));
                hero.ticks_since_shot = 0;
                hero.change_mp(-projectile::ROCKET_MANA_COST);
            }
        } else if input.secondary && hero.ticks_since_shot >= projectile::FLAME_FIRE_RATE {
            let start_x = if aim_right { *x + FLAME_MUZZLE_X } else { *x };
            let start_y = *y + FLAME_MUZZLE_Y;
            shot = Some(projectile::flame(
                start_x,
                start_y,
                input.aim_x,
                input.aim_y,
                carry,
                true,
            ));
            hero.ticks_since_shot = 0;
        }

        hero.ticks_since_shot += 1;
        hero.ticks_since_hit += 1;
        let (hp_regen, mp_regen) = (hero.hp_regen, hero.mp_regen);
        hero.change_hp(hp_regen);
        hero.change_mp(mp_regen);
        hero.bounds.update(*x, *y, width, height);
    }
    if let Some(e) = shot {
        world.queue_spawn(e);
    }
}

/// Victory lap: input is ignored, the hero hoses flame in its facing
/// direction until the player closes the game.
fn celebrate(world: &mut World, i: usize) {
    let mut shot: Option<Entity> = None;
    {
        let ent = &mut world.entities[i];
        let Entity { x, y, data, .. } = ent;
        let EntityData::Hero(hero) = data else { return };
        hero.shooting = true;
        if hero.ticks_since_shot >= projectile::FLAME_FIRE_RATE {
            let target_x = *x + CELEBRATION_RANGE * hero.facing.sign();
            let target_y = *y + FLAME_MUZZLE_Y;
            shot = Some(projectile::flame(
                *x + FLAME_MUZZLE_X,
                *y + FLAME_MUZZLE_Y,
                target_x,
                target_y,
                0.0,
                true,
            ));
            hero.ticks_since_shot = 0;
        }
        hero.ticks_since_shot += 1;
    }
    if let Some(e) = shot {
        world.queue_spawn(e);
    }
}

fn scan_collisions(world: &mut World, i: usize) {
    let count = world.entities.len();
    for j in 0..count {
        if j == i || world.entities[j].removed {
            continue;
        }
        if overlaps(&world.entities[i].rect(), &world.entities[j].rect()) {
            handle_collision(world, i, j);
        }
    }
}

/// Kind-keyed dispatch for hero-vs-other contact.
fn handle_collision(world: &mut World, i: usize, j: usize) {
    let hero_rect = world.entities[i].rect();
    let other_rect = world.entities[j].rect();
    match world.entities[j].kind() {
        Kind::Projectile => {
            let EntityData::Projectile(p) = &world.entities[j].data else {
                return;
            };
            let (friendly, damage) = (p.friendly, p.damage);
            if !friendly {
                if let EntityData::Hero(hero) = &mut world.entities[i].data {
                    hero.change_hp(-damage);
                }
            }
        }
        Kind::HealthPickup => {
            world.entities[j].removed = true;
            if let EntityData::Hero(hero) = &mut world.entities[i].data {
                hero.change_hp(HEALTH_PICKUP_VALUE);
            }
        }
        Kind::ManaPickup => {
            world.entities[j].removed = true;
            if let EntityData::Hero(hero) = &mut world.entities[i].data {
                hero.change_mp(MANA_PICKUP_VALUE);
            }
        }
        Kind::Goal => {
            if let EntityData::Hero(hero) = &mut world.entities[i].data {
                hero.won = true;
            }
        }
        Kind::Checkpoint => {
            if let EntityData::Hero(hero) = &mut world.entities[i].data {
                hero.checkpoint = (other_rect.x, other_rect.y - 100.0);
            }
        }
        Kind::Enemy => {
            if let EntityData::Hero(hero) = &mut world.entities[i].data {
                if hero.ticks_since_hit >= HIT_COOLDOWN {
                    hero.change_hp(-ENEMY_CONTACT_DAMAGE);
                    hero.ticks_since_hit = 0;
                }
            }
            block_movement(world, i, other_rect);
        }
        Kind::Platform | Kind::InvisibleBarrier => {
            block_movement(world, i, other_rect);
        }
        Kind::Hazard => {
            let EntityData::Hazard(hazard) = &world.entities[j].data else {
                return;
            };
            let (top_hit, damage) = (hazard.bounds.top_hits(&hero_rect), hazard.damage);
            if top_hit {
                if let EntityData::Hero(hero) = &mut world.entities[i].data {
                    if hero.ticks_since_hit >= HIT_COOLDOWN {
                        hero.change_hp(-damage);
                        hero.ticks_since_hit = 0;
                    }
                }
            }
            block_movement(world, i, other_rect);
        }
        Kind::Hero => {}
    }
}

/// Snap the hero out of a solid obstacle. First directional hit wins in
/// top, bottom, right, left order; applying it twice with unchanged
/// inputs yields the same position.
fn block_movement(world: &mut World, i: usize, obstacle: Rect) {
    let ent = &mut world.entities[i];
    let (width, height) = (ent.width, ent.height);
    let Entity { x, y, data, .. } = ent;
    let EntityData::Hero(hero) = data else { return };
    match hero.bounds.hit_side(&obstacle) {
        Some(Side::Top) => {
            // Struck the underside of a platform: stop rising.
            *y = obstacle.y + height;
            hero.vertical_accel = 0.0;
        }
        Some(Side::Bottom) => {
            hero.jumping = false;
            *y = obstacle.y - height;
            hero.grounded = true;
            if hero.vertical_accel > 0.0 {
                hero.vertical_accel = 0.0;
            }
        }
        Some(Side::Right) => {
            *x = obstacle.x - width;
        }
        Some(Side::Left) => {
            *x = obstacle.x + obstacle.width;
        }
        None => {}
    }
}

/// Respawn at the last checkpoint when dead or fallen past the kill plane.
fn check_death(world: &mut World, i: usize) {
    let kill_plane = world.kill_plane_y;
    let ent = &mut world.entities[i];
    let fell = ent.y > kill_plane;
    let Entity { x, y, data, .. } = ent;
    let EntityData::Hero(hero) = data else { return };
    if hero.hp <= 0.0 || fell {
        hero.vertical_accel = 0.0;
        *x = hero.checkpoint.0;
        *y = hero.checkpoint.1;
        hero.hp = hero.max_hp;
        hero.mp = hero.max_mp;
    }
}
