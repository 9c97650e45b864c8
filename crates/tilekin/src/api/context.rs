use crate::api::config::PhysicsConfig;
use crate::api::types::{ContactEvent, EntityId};
use crate::components::entity::Entity;
use crate::components::tilemap::TileMap;
use crate::core::scene::Scene;
use crate::systems::physics;

/// Owns everything one physics tick reads and writes.
///
/// The host creates one per level, spawns entities through it and calls
/// [`Simulation::tick`] once per frame before rendering.
pub struct Simulation {
    pub scene: Scene,
    /// Collision grid. `None` disables tile collisions.
    pub tiles: Option<TileMap>,
    config: PhysicsConfig,
    contacts: Vec<ContactEvent>,
    tick_count: u64,
    next_id: u32,
}

impl Simulation {
    pub fn new(config: PhysicsConfig) -> Self {
        log::info!(
            "simulation: gravity={} friction={} tile_size={}",
            config.gravity,
            config.friction,
            config.tile_size
        );
        Self {
            scene: Scene::new(),
            tiles: None,
            config,
            contacts: Vec::new(),
            tick_count: 0,
            next_id: 1,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an entity to the scene. Returns its id.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        match id.0.checked_add(1) {
            Some(after) => self.next_id = self.next_id.max(after),
            None => log::warn!("spawned {:?} at the top of the id range", id),
        }
        self.scene.spawn(entity);
        id
    }

    /// Remove an entity, clearing any tile cell that points at it.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let removed = self.scene.despawn(id);
        if removed.is_none() {
            log::debug!("despawn of unknown entity {:?}", id);
        }
        if let Some(tiles) = self.tiles.as_mut() {
            let cells: Vec<_> = tiles.iter().filter(|&(_, _, t)| t == id).collect();
            for (x, y, _) in cells {
                tiles.set(x, y, None);
            }
        }
        removed
    }

    pub fn set_tiles(&mut self, tiles: TileMap) {
        self.tiles = Some(tiles);
    }

    /// Spawn a tile entity and register it at grid cell (gx, gy). The entity
    /// is still spawned when no tile map is set, it just never collides.
    pub fn spawn_tile(&mut self, entity: Entity, gx: i32, gy: i32) -> EntityId {
        let id = self.spawn(entity);
        match self.tiles.as_mut() {
            Some(tiles) => tiles.set(gx, gy, Some(id)),
            None => log::warn!("spawn_tile({}, {}) without a tile map", gx, gy),
        }
        id
    }

    /// Run one physics tick. Contacts from the previous tick are dropped.
    pub fn tick(&mut self) {
        self.contacts.clear();
        physics::step_into(&mut self.scene, self.tiles.as_ref(), &self.config, &mut self.contacts);
        self.tick_count += 1;
    }

    /// Contacts resolved during the most recent tick.
    pub fn contacts(&self) -> &[ContactEvent] {
        &self.contacts
    }

    /// Number of ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}
