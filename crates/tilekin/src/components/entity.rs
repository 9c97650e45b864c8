use crate::api::types::EntityId;
use crate::components::behavior::{Breakable, Walk};
use crate::components::contact::ContactTags;
use crate::components::kinetic::Kinetic;
use crate::components::transform::Transform;

/// Fat Entity — a single struct with optional components.
///
/// A stage of the physics tick only visits entities that carry every
/// component it needs; the rest are skipped for that stage.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// Free-form label for the host, e.g. "player" or "brick".
    pub tag: String,
    /// Position and size (optional — entities without one never collide or move).
    pub transform: Option<Transform>,
    /// Velocity and acceleration (optional — static entities have none).
    pub kinetic: Option<Kinetic>,
    /// Takes part in collision as mover and/or obstacle.
    pub solid: bool,
    /// Accumulates gravity into `acc_y` every tick.
    pub gravity: bool,
    pub walk: Option<Walk>,
    pub breakable: Option<Breakable>,
    /// Sides touched this tick.
    pub contacts: ContactTags,
}

impl Entity {
    /// Create a new entity with the given ID and no components.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            transform: None,
            kinetic: None,
            solid: false,
            gravity: false,
            walk: None,
            breakable: None,
            contacts: ContactTags::empty(),
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_kinetic(mut self, kinetic: Kinetic) -> Self {
        self.kinetic = Some(kinetic);
        self
    }

    pub fn solid(mut self) -> Self {
        self.solid = true;
        self
    }

    pub fn with_gravity(mut self) -> Self {
        self.gravity = true;
        self
    }

    pub fn with_walk(mut self, walk: Walk) -> Self {
        self.walk = Some(walk);
        self
    }

    pub fn with_breakable(mut self, breakable: Breakable) -> Self {
        self.breakable = Some(breakable);
        self
    }

    pub fn with_contacts(mut self, tags: u8) -> Self {
        self.contacts.assign(tags);
        self
    }

    // -- Queries --

    /// Solid with both a transform and kinetic state: a collision mover.
    pub fn is_mover(&self) -> bool {
        self.solid && self.transform.is_some() && self.kinetic.is_some()
    }

    /// Solid with a transform: usable as a tile obstacle.
    pub fn is_solid_body(&self) -> bool {
        self.solid && self.transform.is_some()
    }
}
