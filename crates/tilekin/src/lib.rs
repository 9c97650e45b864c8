pub mod api;
pub mod core;
pub mod components;
pub mod physics;
pub mod systems;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use api::config::PhysicsConfig;
pub use api::context::Simulation;
pub use api::types::{ContactEvent, Direction, EntityId};
pub use components::behavior::{Breakable, Walk};
pub use components::contact::ContactTags;
pub use components::entity::Entity;
pub use components::kinetic::Kinetic;
pub use components::tilemap::TileMap;
pub use components::transform::Transform;
pub use crate::core::scene::Scene;
pub use physics::aabb::overlaps;
pub use physics::resolve::{resolve, Obstacle};
pub use systems::physics::{step, step_into};
pub use bridge::snapshot::{BodyInstance, BodyBuffer};
