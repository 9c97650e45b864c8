//! Physics tick — runs the stages below once per simulation step, in order:
//!
//! 1. gravity accumulation
//! 2. walk flip (consumes LEFT/RIGHT contacts)
//! 3. breakable growth (consumes BOTTOM contacts once the bump finishes)
//! 4. entity-entity collision
//! 5. entity-tile collision over the 3x3 cell neighborhood
//! 6. integration with deadzone, friction and speed clamping
//!
//! An entity missing a component a stage needs is skipped by that stage.

use crate::api::config::PhysicsConfig;
use crate::api::types::{ContactEvent, Direction};
use crate::components::contact::ContactTags;
use crate::components::entity::Entity;
use crate::components::kinetic::Kinetic;
use crate::components::tilemap::TileMap;
use crate::components::transform::Transform;
use crate::core::scene::Scene;
use crate::physics::resolve::{resolve, Obstacle};

/// Cells probed around the mover's center cell, as (dx, dy).
pub const TILE_OFFSETS: [(i32, i32); 9] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (1, 1),
    (1, -1),
    (-1, -1),
    (0, 0),
];

/// Run one tick. Contacts are discarded; use [`step_into`] to collect them.
pub fn step(scene: &mut Scene, tiles: Option<&TileMap>, config: &PhysicsConfig) {
    let mut contacts = Vec::new();
    step_into(scene, tiles, config, &mut contacts);
}

/// Run one tick, appending every resolved contact to `contacts`.
pub fn step_into(
    scene: &mut Scene,
    tiles: Option<&TileMap>,
    config: &PhysicsConfig,
    contacts: &mut Vec<ContactEvent>,
) {
    apply_gravity(scene, config);
    apply_walk(scene);
    grow_breakables(scene);
    collide_entities(scene, config, contacts);
    match tiles {
        Some(tiles) => collide_tiles(scene, tiles, config, contacts),
        None => log::debug!("no tile map, skipping tile collisions"),
    }
    integrate(scene, config);
}

pub fn apply_gravity(scene: &mut Scene, config: &PhysicsConfig) {
    for entity in scene.iter_mut().filter(|e| e.gravity) {
        if let Some(kinetic) = entity.kinetic.as_mut() {
            kinetic.acc_y += config.gravity;
        }
    }
}

/// Reverse walkers that touched a wall, then drive `speed_x` from the walk speed.
pub fn apply_walk(scene: &mut Scene) {
    for entity in scene.iter_mut() {
        let (Some(walk), Some(kinetic)) = (entity.walk.as_mut(), entity.kinetic.as_mut()) else {
            continue;
        };
        if entity.contacts.has_any(ContactTags::LEFT | ContactTags::RIGHT) {
            walk.speed = -walk.speed;
            entity.contacts.remove(ContactTags::LEFT | ContactTags::RIGHT);
        }
        kinetic.speed_x = walk.speed;
    }
}

/// Advance the bump of every breakable hit from below.
///
/// The BOTTOM contact is only cleared when the bump has finished, so a block
/// keeps bumping on its own until then.
pub fn grow_breakables(scene: &mut Scene) {
    for entity in scene.iter_mut() {
        if !entity.contacts.has(ContactTags::BOTTOM) {
            continue;
        }
        let Some(breakable) = entity.breakable.as_mut() else {
            continue;
        };
        if breakable.finished() {
            entity.contacts.remove(ContactTags::BOTTOM);
            breakable.reset();
        } else if let Some(transform) = entity.transform.as_mut() {
            transform.y += breakable.height();
        }
    }
}

/// Resolve every ordered pair of solid kinetic bodies, mover-outer.
///
/// Corrections are applied in place, so later movers see earlier movers'
/// corrected positions.
pub fn collide_entities(
    scene: &mut Scene,
    config: &PhysicsConfig,
    contacts: &mut Vec<ContactEvent>,
) {
    let bodies = scene.indices_where(Entity::is_mover);
    for &i in &bodies {
        for &j in &bodies {
            let Some((mover, obstacle)) = scene.pair_mut(i, j) else {
                continue;
            };
            let direction = resolve_pair(mover, obstacle, config);
            record(mover, obstacle, direction, false, contacts);
        }
    }
}

/// Resolve every solid kinetic body against the solid tiles around its center.
pub fn collide_tiles(
    scene: &mut Scene,
    tiles: &TileMap,
    config: &PhysicsConfig,
    contacts: &mut Vec<ContactEvent>,
) {
    let bodies = scene.indices_where(Entity::is_mover);
    for &i in &bodies {
        for (dx, dy) in TILE_OFFSETS {
            // Recomputed per cell: earlier tiles may have moved the body.
            let Some(center) = scene.at(i).and_then(|e| e.transform).map(|t| t.center()) else {
                continue;
            };
            let (cx, cy) = TileMap::cell_at(center.x, center.y, config.tile_size);
            let Some(tile_id) = tiles.get(cx + dx, cy + dy) else {
                continue;
            };
            let Some(j) = scene.index_of(tile_id) else {
                log::debug!("tile map refers to missing entity {:?}", tile_id);
                continue;
            };
            if !scene.at(j).is_some_and(Entity::is_solid_body) {
                continue;
            }
            let Some((mover, tile)) = scene.pair_mut(i, j) else {
                continue;
            };
            let direction = resolve_pair(mover, tile, config);
            record(mover, tile, direction, true, contacts);
        }
    }
}

/// Integrate speed into position and acceleration into speed, then apply the
/// deadzone, friction and speed caps.
pub fn integrate(scene: &mut Scene, config: &PhysicsConfig) {
    for entity in scene.iter_mut() {
        if let (Some(transform), Some(kinetic)) =
            (entity.transform.as_mut(), entity.kinetic.as_mut())
        {
            integrate_body(transform, kinetic, config);
        }
    }
}

fn integrate_body(transform: &mut Transform, kinetic: &mut Kinetic, config: &PhysicsConfig) {
    transform.x += kinetic.speed_x;
    transform.y += kinetic.speed_y;
    kinetic.speed_x += kinetic.acc_x;
    kinetic.speed_y += kinetic.acc_y;

    if kinetic.speed_y.abs() < config.deadzone {
        kinetic.speed_y = 0.0;
    }
    if kinetic.speed_x.abs() < config.deadzone {
        kinetic.speed_x = 0.0;
    }
    kinetic.speed_y *= config.friction;
    kinetic.speed_x *= config.friction;

    kinetic.speed_y = kinetic.speed_y.min(config.max_speed_y).max(-config.max_speed_y);
    kinetic.speed_x = kinetic.speed_x.min(config.max_speed_x).max(-config.max_speed_x);
}

fn resolve_pair(mover: &mut Entity, obstacle: &mut Entity, config: &PhysicsConfig) -> Direction {
    let (Some(transform), Some(kinetic), Some(solid)) = (
        mover.transform.as_mut(),
        mover.kinetic.as_mut(),
        obstacle.transform.as_ref(),
    ) else {
        return Direction::None;
    };
    resolve(Obstacle::new(solid, &mut obstacle.contacts), transform, kinetic, config)
}

fn record(
    mover: &mut Entity,
    obstacle: &Entity,
    direction: Direction,
    tile: bool,
    contacts: &mut Vec<ContactEvent>,
) {
    if direction.is_none() {
        return;
    }
    mover.contacts.assign_direction(direction);
    log::trace!("{:?} touched {:?} on {:?}", mover.id, obstacle.id, direction);
    contacts.push(ContactEvent {
        mover: mover.id,
        obstacle: obstacle.id,
        direction,
        tile,
    });
}
