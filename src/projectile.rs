//! Rocket and flame shots.
//!
//! Both ride a closed-form [`ShotPath`] and die either at the end of their
//! tick lifetime or on terminal contact. The shot itself never deals
//! damage; victims read `damage` off the overlapping projectile in their
//! own collision scans. Rockets end in a short exploding state that is
//! render-only and harmless.

use macroquad::rand::gen_range;

use crate::entity::{Entity, EntityData, Kind};
use crate::geom::overlaps;
use crate::motion::ShotPath;
use crate::world::World;

pub const ROCKET_DAMAGE: f32 = 5.0;
pub const ROCKET_MANA_COST: f32 = 5.0;
/// Minimum ticks between rocket shots.
pub const ROCKET_FIRE_RATE: u32 = 20;
const ROCKET_SPEED: f32 = 15.0;
const ROCKET_LIFETIME: u32 = 100;
const ROCKET_SIZE: f32 = 12.5;
/// How long the exploding state lingers before removal.
pub const EXPLOSION_TICKS: u32 = 10;

pub const FLAME_DAMAGE: f32 = 0.25;
/// Flame streams every tick and costs no mana.
pub const FLAME_FIRE_RATE: u32 = 1;
const FLAME_SPEED: f32 = 10.0;
const FLAME_LIFETIME: u32 = 40;
const FLAME_SIZE: f32 = 18.0;
// Per-particle gravity jitter makes the stream fan out.
const FLAME_GRAVITY_MIN: f32 = -0.03;
const FLAME_GRAVITY_MAX: f32 = 0.045;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotKind {
    Rocket,
    Flame,
}

#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub kind: ShotKind,
    /// Fired by the hero. Friendly shots hurt enemies, unfriendly ones the
    /// hero; nothing hurts its own side.
    pub friendly: bool,
    pub damage: f32,
    pub path: ShotPath,
    /// Rocket terminal state: inert, plays out the explosion then goes away.
    pub exploding: bool,
    pub explosion_ticks: u32,
}

/// Build a rocket entity flying from `(x, y)` toward the target point.
pub fn rocket(x: f32, y: f32, target_x: f32, target_y: f32, carry: f32, friendly: bool) -> Entity {
    Entity::new(
        x,
        y,
        ROCKET_SIZE,
        ROCKET_SIZE,
        EntityData::Projectile(Projectile {
            kind: ShotKind::Rocket,
            friendly,
            damage: ROCKET_DAMAGE,
            path: ShotPath::new(
                x,
                y,
                ROCKET_LIFETIME,
                target_x,
                target_y,
                0.0,
                carry,
                ROCKET_SPEED,
                0.0,
            ),
            exploding: false,
            explosion_ticks: EXPLOSION_TICKS,
        }),
    )
}

/// Build one flame particle with randomized gravity jitter.
pub fn flame(x: f32, y: f32, target_x: f32, target_y: f32, carry: f32, friendly: bool) -> Entity {
    flame_with_gravity(
        x,
        y,
        target_x,
        target_y,
        carry,
        friendly,
        gen_range(FLAME_GRAVITY_MIN, FLAME_GRAVITY_MAX),
    )
}

fn flame_with_gravity(
    x: f32,
    y: f32,
    target_x: f32,
    target_y: f32,
    carry: f32,
    friendly: bool,
    gravity: f32,
) -> Entity {
    Entity::new(
        x,
        y,
        FLAME_SIZE,
        FLAME_SIZE,
        EntityData::Projectile(Projectile {
            kind: ShotKind::Flame,
            friendly,
            damage: FLAME_DAMAGE,
            path: ShotPath::new(
                x,
                y,
                FLAME_LIFETIME,
                target_x,
                target_y,
                gravity,
                carry,
                FLAME_SPEED,
                0.0,
            ),
            exploding: false,
            explosion_ticks: EXPLOSION_TICKS,
        }),
    )
}

/// One projectile tick: explosion countdown, terminal contacts, flight.
pub fn update(world: &mut World, i: usize) {
    {
        let ent = &mut world.entities[i];
        let Entity { removed, data, .. } = ent;
        let EntityData::Projectile(p) = data else { return };
        if p.exploding {
            if p.explosion_ticks == 0 {
                *removed = true;
            } else {
                p.explosion_ticks -= 1;
            }
            return;
        }
    }

    scan_collisions(world, i);

    let ent = &mut world.entities[i];
    let Entity {
        x, y, removed, data, ..
    } = ent;
    let EntityData::Projectile(p) = data else { return };
    // A collision this tick may already have ended the flight.
    if p.exploding || *removed {
        return;
    }
    p.path.tick();
    let (px, py) = p.path.position();
    *x = px;
    *y = py;
    if p.path.is_done() {
        finish(p, removed);
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

fn handle_collision(world: &mut World, i: usize, j: usize) {
    let other_kind = world.entities[j].kind();
    let ent = &mut world.entities[i];
    let Entity { removed, data, .. } = ent;
    let EntityData::Projectile(p) = data else { return };
    let terminal = match other_kind {
        // Scenery always stops a shot.
        Kind::Platform | Kind::Hazard => true,
        Kind::Hero => !p.friendly,
        Kind::Enemy => p.friendly,
        // Markers, pickups, barriers and other shots are passed through.
        Kind::Projectile
        | Kind::HealthPickup
        | Kind::ManaPickup
        | Kind::Goal
        | Kind::Checkpoint
        | Kind::InvisibleBarrier => false,
    };
    if terminal {
        p.path.stop();
        finish(p, removed);
    }
}

/// End of flight: rockets switch to the exploding state, flames vanish.
fn finish(p: &mut Projectile, removed: &mut bool) {
    match p.kind {
        ShotKind::Rocket => p.exploding = true,
        ShotKind::Flame => *removed = true,
    }
}
