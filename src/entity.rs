//! Entity base record and kind-specific payloads.
//!
//! Every game object is an [`Entity`]: a position/size record, a removal
//! flag, and a closed sum of kind payloads. Behavior lives in free
//! functions keyed on the kind (`hero::update`, `enemy::update`, ...), not
//! in a virtual hierarchy. Static tiles (platforms, pickups, goal,
//! checkpoint) carry no per-tick behavior at all.

use crate::collision::SideBounds;
use crate::enemy::Enemy;
use crate::geom::Rect;
use crate::hero::Hero;
use crate::projectile::Projectile;

/// Standard tile edge length in pixels; the level grid is built on it.
pub const TILE_SIZE: f32 = 52.0;

/// Closed set of concrete entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Hero,
    Enemy,
    Platform,
    Projectile,
    HealthPickup,
    ManaPickup,
    Goal,
    Hazard,
    InvisibleBarrier,
    Checkpoint,
}

/// Which way an actor faces. Decides patrol direction, sprite flip and
/// muzzle offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Visual variant for solid platform tiles. Render-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformStyle {
    Floor,
    Bricks,
    GapLeft,
    GapRight,
    SteelBlock,
}

/// Hazard tile shapes. Each gets its own top/bottom collision regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardShape {
    /// Free-floating spike strip, half a tile tall.
    Floating,
    /// Spikes mounted on a solid steel block.
    Block,
    /// Spikes replacing a floor tile.
    Floor,
}

/// Stationary damage tile. Hurts only on top-side contact, gated by the
/// victim's hit cooldown.
#[derive(Debug, Clone, Copy)]
pub struct Hazard {
    pub damage: f32,
    pub shape: HazardShape,
    pub bounds: SideBounds,
}

pub const HAZARD_DAMAGE: f32 = 34.0;

impl Hazard {
    /// Build a hazard at a tile position. The directional regions are
    /// shape-specific rather than the default percentage split: the top
    /// region hugs the spike tips so only genuine top contact hurts.
    pub fn new(x: f32, y: f32, shape: HazardShape) -> (Self, f32, f32) {
        let width = TILE_SIZE;
        let height = match shape {
            HazardShape::Floating => 25.0,
            HazardShape::Block | HazardShape::Floor => TILE_SIZE,
        };
        let mut bounds = SideBounds::new(x, y, width, height);
        match shape {
            HazardShape::Floating => {
                bounds.top.set(x + 10.0, y, width - 20.0, 0.4 * height);
                bounds.bottom.set(x, y + 0.4 * height, width, 0.6 * height);
            }
            HazardShape::Block => {
                bounds.top.set(x, y - 1.0, width, 0.3 * height);
                bounds.bottom.set(x, y + 0.3 * height, width, 0.7 * height);
            }
            HazardShape::Floor => {
                bounds.top.set(x, y - 1.0, width, 0.4 * height);
                bounds.bottom.set(x, y + 0.4 * height, width, 0.6 * height);
            }
        }
        (
            Self {
                damage: HAZARD_DAMAGE,
                shape,
                bounds,
            },
            width,
            height,
        )
    }
}

/// Kind-specific payload. One variant per concrete kind.
#[derive(Debug, Clone)]
pub enum EntityData {
    Hero(Hero),
    Enemy(Enemy),
    Platform(PlatformStyle),
    Projectile(Projectile),
    HealthPickup,
    ManaPickup,
    Goal,
    Hazard(Hazard),
    InvisibleBarrier,
    Checkpoint,
}

/// A game object: shared base record plus kind payload.
#[derive(Debug, Clone)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Flagged during a tick, purged at end of tick.
    pub removed: bool,
    pub data: EntityData,
}

impl Entity {
    pub fn new(x: f32, y: f32, width: f32, height: f32, data: EntityData) -> Self {
        Self {
            x,
            y,
            width,
            height,
            removed: false,
            data,
        }
    }

    pub fn kind(&self) -> Kind {
        match self.data {
            EntityData::Hero(_) => Kind::Hero,
            EntityData::Enemy(_) => Kind::Enemy,
            EntityData::Platform(_) => Kind::Platform,
            EntityData::Projectile(_) => Kind::Projectile,
            EntityData::HealthPickup => Kind::HealthPickup,
            EntityData::ManaPickup => Kind::ManaPickup,
            EntityData::Goal => Kind::Goal,
            EntityData::Hazard(_) => Kind::Hazard,
            EntityData::InvisibleBarrier => Kind::InvisibleBarrier,
            EntityData::Checkpoint => Kind::Checkpoint,
        }
    }

    /// Current bounding box.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    // ------------------------------------------------------------------
    // Static tile constructors. Hero/enemy/projectile constructors live in
    // their own modules.
    // ------------------------------------------------------------------

    pub fn platform(x: f32, y: f32, style: PlatformStyle) -> Self {
        Self::new(x, y, TILE_SIZE, TILE_SIZE, EntityData::Platform(style))
    }

    pub fn invisible_barrier(x: f32, y: f32) -> Self {
        Self::new(x, y, TILE_SIZE, TILE_SIZE, EntityData::InvisibleBarrier)
    }

    pub fn hazard(x: f32, y: f32, shape: HazardShape) -> Self {
        let (hazard, width, height) = Hazard::new(x, y, shape);
        Self::new(x, y, width, height, EntityData::Hazard(hazard))
    }

    pub fn health_pickup(x: f32, y: f32) -> Self {
        Self::new(x, y, TILE_SIZE, TILE_SIZE, EntityData::HealthPickup)
    }

    pub fn mana_pickup(x: f32, y: f32) -> Self {
        Self::new(x, y, TILE_SIZE, TILE_SIZE, EntityData::ManaPickup)
    }

    /// Goal and checkpoint markers span a 2x2 tile footprint.
    pub fn goal(x: f32, y: f32) -> Self {
        Self::new(x, y, TILE_SIZE * 2.0, TILE_SIZE * 2.0, EntityData::Goal)
    }

    pub fn checkpoint(x: f32, y: f32) -> Self {
        Self::new(x, y, TILE_SIZE * 2.0, TILE_SIZE * 2.0, EntityData::Checkpoint)
    }
}

/// Amount restored by a health pickup.
pub const HEALTH_PICKUP_VALUE: f32 = 25.0;
/// Amount restored by a mana pickup.
pub const MANA_PICKUP_VALUE: f32 = 25.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_payload() {
        assert_eq!(
            Entity::platform(0.0, 0.0, PlatformStyle::Floor).kind(),
            Kind::Platform
        );
        assert_eq!(Entity::health_pickup(0.0, 0.0).kind(), Kind::HealthPickup);
        assert_eq!(Entity::goal(0.0, 0.0).kind(), Kind::Goal);
        assert_eq!(
            Entity::hazard(0.0, 0.0, HazardShape::Floor).kind(),
            Kind::Hazard
        );
    }

    #[test]
    fn test_floating_hazard_is_short() {
        let e = Entity::hazard(100.0, 50.0, HazardShape::Floating);
        assert_eq!(e.height, 25.0);
        let EntityData::Hazard(h) = &e.data else {
            panic!("expected hazard payload");
        };
        // Top region is inset 10px on each side and 40% tall.
        assert_eq!(h.bounds.top.x, 110.0);
        assert_eq!(h.bounds.top.width, 32.0);
        assert_eq!(h.bounds.top.height, 10.0);
    }

    #[test]
    fn test_block_hazard_top_region_pokes_above_tile() {
        let e = Entity::hazard(0.0, 100.0, HazardShape::Block);
        let EntityData::Hazard(h) = &e.data else {
            panic!("expected hazard payload");
        };
        // The top region starts one pixel above the tile so an entity
        // standing exactly on it still registers top contact.
        assert_eq!(h.bounds.top.y, 99.0);
    }
}
