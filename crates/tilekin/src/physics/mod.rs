//! Collision primitives: the overlap test and the directional resolver.

pub mod aabb;
pub mod resolve;
