//! Patrolling flame-turret enemy.
//!
//! Walks a fixed range around its spawn point, obeys gravity and solid
//! tiles, and hoses flame in its walking direction. Dies to friendly
//! projectiles and is purged at the end of the tick.

use crate::collision::{Side, SideBounds};
use crate::entity::{Entity, EntityData, Facing, Kind};
use crate::geom::{overlaps, Rect};
use crate::projectile;
use crate::world::World;

pub const MAX_HP: f32 = 25.0;
/// Patrol speed, px per tick.
pub const SPEED: f32 = 5.0;
pub const GRAVITY: f32 = 1.0;
/// Half-width of the patrol corridor around the spawn x.
pub const PATROL_RANGE: f32 = 200.0;

const SPRITE_SCALE: f32 = 1.5;
pub const WIDTH: f32 = 113.0 * SPRITE_SCALE;
pub const HEIGHT: f32 = 79.0 * SPRITE_SCALE;

// Flame nozzle offsets within the sprite.
const MUZZLE_X: f32 = 18.0;
const MUZZLE_Y_START: f32 = 42.0;
const MUZZLE_Y_END: f32 = 52.5;
/// How far ahead of the nozzle the flame is aimed.
const FLAME_REACH: f32 = 50.0;
/// Horizontal speed handed to the shot as carry.
const FLAME_CARRY: f32 = 5.0;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub hp: f32,
    pub max_hp: f32,
    pub facing: Facing,
    /// Vertical speed, positive downward.
    pub vertical_accel: f32,
    /// Spawn x, the center of the patrol corridor.
    pub origin_x: f32,
    pub ticks_since_shot: u32,
    pub bounds: SideBounds,
}

/// Build an enemy entity patrolling around `x`.
pub fn spawn(x: f32, y: f32) -> Entity {
    Entity::new(
        x,
        y,
        WIDTH,
        HEIGHT,
        EntityData::Enemy(Enemy {
            hp: MAX_HP,
            max_hp: MAX_HP,
            facing: Facing::Right,
            vertical_accel: 0.0,
            origin_x: x,
            // Starts elapsed so the first update already fires.
            ticks_since_shot: projectile::FLAME_FIRE_RATE,
            bounds: SideBounds::new(x, y, WIDTH, HEIGHT),
        }),
    )
}

/// One enemy tick: collisions, patrol movement, gravity, flame fire.
pub fn update(world: &mut World, i: usize) {
    scan_collisions(world, i);

    let mut shot: Option<Entity> = None;
    {
        let ent = &mut world.entities[i];
        let (width, height) = (ent.width, ent.height);
        let Entity {
            x, y, removed, data, ..
        } = ent;
        let EntityData::Enemy(enemy) = data else { return };
        if enemy.hp <= 0.0 {
            *removed = true;
            return;
        }

        // Walk, turning around at the corridor edges.
        *x += SPEED * enemy.facing.sign();
        if *x > enemy.origin_x + PATROL_RANGE {
            enemy.facing = Facing::Left;
        } else if *x < enemy.origin_x - PATROL_RANGE {
            enemy.facing = Facing::Right;
        }

        *y += enemy.vertical_accel;
        enemy.vertical_accel += GRAVITY;

        if enemy.ticks_since_shot >= projectile::FLAME_FIRE_RATE {
            let sign = enemy.facing.sign();
            let nozzle_x = match enemy.facing {
                Facing::Left => *x + MUZZLE_X,
                Facing::Right => *x + width - MUZZLE_X,
            };
            shot = Some(projectile::flame(
                nozzle_x,
                *y + MUZZLE_Y_START,
                nozzle_x + FLAME_REACH * sign,
                *y + MUZZLE_Y_END,
                FLAME_CARRY * sign,
                false,
            ));
            enemy.ticks_since_shot = 0;
        }
        enemy.ticks_since_shot += 1;

        enemy.bounds.update(*x, *y, width, height);
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

fn handle_collision(world: &mut World, i: usize, j: usize) {
    let other_rect = world.entities[j].rect();
    match world.entities[j].kind() {
        Kind::Projectile => {
            let EntityData::Projectile(p) = &world.entities[j].data else {
                return;
            };
            let (friendly, exploding, damage) = (p.friendly, p.exploding, p.damage);
            // An exploding rocket already dealt its hit.
            if friendly && !exploding {
                if let EntityData::Enemy(enemy) = &mut world.entities[i].data {
                    enemy.hp -= damage;
                    if enemy.hp <= 0.0 {
                        world.entities[i].removed = true;
                    }
                }
            }
        }
        Kind::Platform | Kind::InvisibleBarrier | Kind::Hazard | Kind::Enemy => {
            block_movement(world, i, other_rect);
        }
        // Contact damage to the hero is handled on the hero's side.
        Kind::Hero | Kind::HealthPickup | Kind::ManaPickup | Kind::Goal | Kind::Checkpoint => {}
    }
}

fn block_movement(world: &mut World, i: usize, obstacle: Rect) {
    let ent = &mut world.entities[i];
    let (width, height) = (ent.width, ent.height);
    let Entity { x, y, data, .. } = ent;
    let EntityData::Enemy(enemy) = data else { return };
    match enemy.bounds.hit_side(&obstacle) {
        Some(Side::Top) => {
            *y = obstacle.y + height;
            enemy.vertical_accel = 0.0;
        }
        Some(Side::Bottom) => {
            *y = obstacle.y - height;
            if enemy.vertical_accel > 0.0 {
                enemy.vertical_accel = 0.0;
            }
        }
        // A wall only snaps the position; turning around stays tied to
        // the patrol corridor edges.
        Some(Side::Right) => {
            *x = obstacle.x - width;
        }
        Some(Side::Left) => {
            *x = obstacle.x + obstacle.width;
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSnapshot;

    fn enemy_of(world: &World, i: usize) -> &Enemy {
        match &world.entities[i].data {
            EntityData::Enemy(e) => e,
            _ => panic!("entity {i} is not an enemy"),
        }
    }

    #[test]
    fn test_patrol_starts_right_and_reverses_at_range_edge() {
        let mut world = World::new();
        let i = world.add_entity(spawn(1000.0, 0.0));
        assert_eq!(enemy_of(&world, i).facing, Facing::Right);

        // Walk right until past origin + range, then the facing flips.
        for _ in 0..((PATROL_RANGE / SPEED) as u32 + 2) {
            update(&mut world, i);
            world.drain_spawns();
        }
        assert_eq!(enemy_of(&world, i).facing, Facing::Left);
        assert!(world.entities[i].x <= 1000.0 + PATROL_RANGE + SPEED);
    }

    #[test]
    fn test_wall_snap_does_not_turn_the_patrol() {
        let mut world = World::new();
        let i = world.add_entity(spawn(0.0, 0.0));
        // A wall overlapping the right strip: position snaps, facing stays.
        let wall = crate::geom::Rect::new(140.0, 10.0, 52.0, 52.0);
        block_movement(&mut world, i, wall);
        assert_eq!(world.entities[i].x, wall.x - WIDTH);
        assert_eq!(enemy_of(&world, i).facing, Facing::Right);
    }

    #[test]
    fn test_friendly_rockets_whittle_down_hp() {
        let mut world = World::new();
        let i = world.add_entity(spawn(0.0, 0.0));
        for _ in 0..2 {
            let j = world.add_entity(crate::projectile::rocket(
                10.0, 10.0, 100.0, 10.0, 0.0, true,
            ));
            handle_collision(&mut world, i, j);
            world.entities[j].removed = true;
        }
        assert_eq!(
            enemy_of(&world, i).hp,
            MAX_HP - 2.0 * crate::projectile::ROCKET_DAMAGE
        );
        assert!(!world.entities[i].removed);
    }

    #[test]
    fn test_dies_when_hp_reaches_zero() {
        let mut world = World::new();
        let i = world.add_entity(spawn(0.0, 0.0));
        if let EntityData::Enemy(e) = &mut world.entities[i].data {
            e.hp = crate::projectile::ROCKET_DAMAGE;
        }
        let j = world.add_entity(crate::projectile::rocket(
            10.0, 10.0, 100.0, 10.0, 0.0, true,
        ));
        handle_collision(&mut world, i, j);
        assert!(world.entities[i].removed);
    }

    #[test]
    fn test_unfriendly_projectiles_do_not_hurt() {
        let mut world = World::new();
        let i = world.add_entity(spawn(0.0, 0.0));
        let j = world.add_entity(crate::projectile::flame(
            10.0, 10.0, 100.0, 10.0, 0.0, false,
        ));
        handle_collision(&mut world, i, j);
        assert_eq!(enemy_of(&world, i).hp, MAX_HP);
    }

    #[test]
    fn test_fires_flame_every_tick() {
        let mut world = World::new();
        let i = world.add_entity(spawn(0.0, 0.0));
        update(&mut world, i);
        world.drain_spawns();
        let flames: Vec<_> = world
            .entities
            .iter()
            .filter(|e| e.kind() == Kind::Projectile)
            .collect();
        assert_eq!(flames.len(), 1);
        let EntityData::Projectile(p) = &flames[0].data else {
            panic!("expected projectile payload");
        };
        assert!(!p.friendly);
    }

    #[test]
    fn test_removed_enemy_is_purged_by_step() {
        let mut world = World::new();
        let i = world.add_entity(spawn(0.0, 0.0));
        if let EntityData::Enemy(e) = &mut world.entities[i].data {
            e.hp = 0.0;
        }
        world.step(&InputSnapshot::default());
        assert!(world
            .entities
            .iter()
            .all(|e| e.kind() != Kind::Enemy));
    }
}
