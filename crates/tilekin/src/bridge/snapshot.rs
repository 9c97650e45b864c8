use bytemuck::{Pod, Zeroable};

use crate::core::scene::Scene;

/// Per-body record for a host renderer or debug overlay.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// Top-left X in world space.
    pub x: f32,
    /// Top-left Y in world space.
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    /// `ContactTags` bits.
    pub contacts: f32,
    /// Entity id.
    pub id: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Snapshot of every entity with a Transform, rebuilt after each tick.
pub struct BodyBuffer {
    pub instances: Vec<BodyInstance>,
}

impl BodyBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(256),
        }
    }

    /// Replace the contents with the current state of `scene`, in scene order.
    pub fn fill(&mut self, scene: &Scene) {
        self.instances.clear();
        for entity in scene.iter() {
            let Some(t) = entity.transform else { continue };
            let speed = entity.kinetic.map(|k| k.speed()).unwrap_or_default();
            self.instances.push(BodyInstance {
                x: t.x,
                y: t.y,
                w: t.w,
                h: t.h,
                speed_x: speed.x,
                speed_y: speed.y,
                contacts: entity.contacts.bits() as f32,
                id: entity.id.0 as f32,
            });
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Flat byte view for handing to a host.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances[..])
    }
}

impl Default for BodyBuffer {
    fn default() -> Self {
        Self::new()
    }
}
