//! Text-to-world level builder.
//!
//! A level is a plain text grid, one character per tile on a 52px grid.
//! Unknown characters are skipped so maps can carry spacing and decoration
//! freely.
//!
//! ```text
//! .  floor        =  bricks       <  gap left    >  gap right
//! -  steel block  ?  invisible barrier
//! ^  spikes on block  *  floating spikes  #  floor spikes
//! p  hero spawn   c  enemy        s  checkpoint  +  goal
//! h  health pack  m  mana pack
//! ```

use crate::entity::{Entity, HazardShape, PlatformStyle, TILE_SIZE};
use crate::geom::Rect;
use crate::world::World;
use crate::{enemy, hero};

/// Populate `world` from a level grid and set its bounds.
pub fn build_level(world: &mut World, text: &str) {
    let mut col: u32 = 0;
    let mut row: u32 = 0;
    let mut max_cols: u32 = 0;

    for ch in text.chars() {
        if ch == '\n' {
            row += 1;
            col = 0;
            continue;
        }
        let x = col as f32 * TILE_SIZE;
        let y = row as f32 * TILE_SIZE;
        let entity = match ch {
            '.' => Some(Entity::platform(x, y, PlatformStyle::Floor)),
            '=' => Some(Entity::platform(x, y, PlatformStyle::Bricks)),
            '<' => Some(Entity::platform(x, y, PlatformStyle::GapLeft)),
            '>' => Some(Entity::platform(x, y, PlatformStyle::GapRight)),
            '-' => Some(Entity::platform(x, y, PlatformStyle::SteelBlock)),
            '?' => Some(Entity::invisible_barrier(x, y)),
            '^' => Some(Entity::hazard(x, y, HazardShape::Block)),
            '*' => Some(Entity::hazard(x, y, HazardShape::Floating)),
            '#' => Some(Entity::hazard(x, y, HazardShape::Floor)),
            'p' => Some(hero::spawn(x, y)),
            'c' => Some(enemy::spawn(x, y)),
            's' => Some(Entity::checkpoint(x, y)),
            '+' => Some(Entity::goal(x, y)),
            'h' => Some(Entity::health_pickup(x, y)),
            'm' => Some(Entity::mana_pickup(x, y)),
            _ => None,
        };
        if let Some(e) = entity {
            world.add_entity(e);
        }
        col += 1;
        max_cols = max_cols.max(col);
    }

    // A trailing newline does not add a row.
    let rows = row + u32::from(col > 0);
    world.bounds = Rect::new(
        0.0,
        0.0,
        max_cols as f32 * TILE_SIZE,
        rows as f32 * TILE_SIZE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityData, Kind};

    fn hazard_shape(world: &World, i: usize) -> HazardShape {
        match &world.entities[i].data {
            EntityData::Hazard(h) => h.shape,
            _ => panic!("entity {i} is not a hazard"),
        }
    }

    #[test]
    fn test_tiles_land_on_the_grid() {
        let mut world = World::new();
        build_level(&mut world, "p h\n...\n");

        let hero = &world.entities[0];
        assert_eq!(hero.kind(), Kind::Hero);
        assert_eq!((hero.x, hero.y), (0.0, 0.0));

        let pack = &world.entities[1];
        assert_eq!(pack.kind(), Kind::HealthPickup);
        assert_eq!((pack.x, pack.y), (2.0 * TILE_SIZE, 0.0));

        let floors: Vec<_> = world
            .entities
            .iter()
            .filter(|e| e.kind() == Kind::Platform)
            .collect();
        assert_eq!(floors.len(), 3);
        assert_eq!(floors[0].y, TILE_SIZE);
    }

    #[test]
    fn test_unknown_characters_are_skipped_but_keep_spacing() {
        let mut world = World::new();
        build_level(&mut world, "x!p\n");
        assert_eq!(world.entities.len(), 1);
        // The junk characters still occupy grid columns.
        assert_eq!(world.entities[0].x, 2.0 * TILE_SIZE);
        assert!(world.hero.is_some());
    }

    #[test]
    fn test_bounds_cover_the_widest_row() {
        let mut world = World::new();
        build_level(&mut world, "..\n.....\n.\n");
        assert_eq!(world.bounds.width, 5.0 * TILE_SIZE);
        assert_eq!(world.bounds.height, 3.0 * TILE_SIZE);
    }

    #[test]
    fn test_all_tile_kinds_build() {
        let mut world = World::new();
        build_level(&mut world, ".=<>-?^*#pcs+hm\n");
        let kinds: Vec<_> = world.entities.iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                Kind::Platform,
                Kind::Platform,
                Kind::Platform,
                Kind::Platform,
                Kind::Platform,
                Kind::InvisibleBarrier,
                Kind::Hazard,
                Kind::Hazard,
                Kind::Hazard,
                Kind::Hero,
                Kind::Enemy,
                Kind::Checkpoint,
                Kind::Goal,
                Kind::HealthPickup,
                Kind::ManaPickup,
            ]
        );
        assert_eq!(hazard_shape(&world, 6), HazardShape::Block);
        assert_eq!(hazard_shape(&world, 7), HazardShape::Floating);
        assert_eq!(hazard_shape(&world, 8), HazardShape::Floor);
    }

    #[test]
    fn test_caret_builds_block_mounted_spikes() {
        // `^` is the spikes-on-steel-block tile, a full tile tall; `*` is
        // the short free-floating strip.
        let mut world = World::new();
        build_level(&mut world, "^*\n");
        assert_eq!(hazard_shape(&world, 0), HazardShape::Block);
        assert_eq!(world.entities[0].height, TILE_SIZE);
        assert_eq!(hazard_shape(&world, 1), HazardShape::Floating);
        assert_eq!(world.entities[1].height, 25.0);
    }
}
