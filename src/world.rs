//! Entity list and the per-tick update loop.
//!
//! The world owns every entity in a single `Vec` and steps them in list
//! order. Shots fired during a tick go through a spawn queue that is
//! drained after each entity's update: later entities in the same pass can
//! see (and collide with) a fresh shot, but the shot itself first moves on
//! the next tick. Removal is a flag during the tick and a single ordered
//! purge at the end.

use std::panic::{catch_unwind, AssertUnwindSafe};

use macroquad::prelude::warn;

use crate::entity::{Entity, Kind};
use crate::geom::Rect;
use crate::hero::Hero;
use crate::input::InputSnapshot;
use crate::{enemy, hero, projectile};

/// Falling past this y respawns the hero at its checkpoint.
pub const DEFAULT_KILL_PLANE_Y: f32 = 2000.0;

pub struct World {
    pub entities: Vec<Entity>,
    spawn_queue: Vec<Entity>,
    /// Index of the hero, refreshed after each purge.
    pub hero: Option<usize>,
    /// Level extent, set by the level builder. The camera clamps to it.
    pub bounds: Rect,
    pub kill_plane_y: f32,
    /// Entities whose update panicked and were dropped. Diagnostic only.
    pub update_faults: u32,
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            spawn_queue: Vec::new(),
            hero: None,
            bounds: Rect::default(),
            kill_plane_y: DEFAULT_KILL_PLANE_Y,
            update_faults: 0,
        }
    }

    /// Add an entity immediately and return its index.
    pub fn add_entity(&mut self, entity: Entity) -> usize {
        let index = self.entities.len();
        if entity.kind() == Kind::Hero {
            self.hero = Some(index);
        }
        self.entities.push(entity);
        index
    }

    /// Queue an entity for insertion after the current entity's update.
    pub fn queue_spawn(&mut self, entity: Entity) {
        self.spawn_queue.push(entity);
    }

    pub(crate) fn drain_spawns(&mut self) {
        for entity in self.spawn_queue.drain(..) {
            self.entities.push(entity);
        }
    }

    /// Advance the simulation one tick.
    ///
    /// Entities present at the start of the tick update in list order;
    /// entities spawned mid-tick wait for the next one. A panicking update
    /// removes only the offending entity.
    pub fn step(&mut self, input: &InputSnapshot) {
        let count = self.entities.len();
        for i in 0..count {
            if self.entities[i].removed {
                continue;
            }
            let kind = self.entities[i].kind();
            let result = catch_unwind(AssertUnwindSafe(|| match kind {
                Kind::Hero => hero::update(self, i, input),
                Kind::Enemy => enemy::update(self, i),
                Kind::Projectile => projectile::update(self, i),
                // Static tiles have no per-tick behavior.
                _ => {}
            }));
            if result.is_err() {
                self.update_faults += 1;
                self.entities[i].removed = true;
                warn!("{:?} update panicked, removing entity {}", kind, i);
            }
            self.drain_spawns();
        }

        self.entities.retain(|e| !e.removed);
        self.locate_hero();
    }

    fn locate_hero(&mut self) {
        self.hero = self.entities.iter().position(|e| e.kind() == Kind::Hero);
    }

    pub fn hero(&self) -> Option<&Hero> {
        let i = self.hero?;
        match &self.entities[i].data {
            crate::entity::EntityData::Hero(h) => Some(h),
            _ => None,
        }
    }

    /// Bounding box of the hero entity, if one is alive.
    pub fn hero_rect(&self) -> Option<Rect> {
        self.hero.map(|i| self.entities[i].rect())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
