pub mod behavior;
pub mod contact;
pub mod entity;
pub mod kinetic;
pub mod tilemap;
pub mod transform;
