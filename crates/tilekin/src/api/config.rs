use serde::{Deserialize, Serialize};

/// Tunables for the physics tick, passed by reference into every stage.
///
/// Units are pixels and pixels-per-tick. Loaded from JSON by hosts that ship
/// per-level tuning; any field left out falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to `acc_y` of every gravity-marked body each tick (Y grows downward).
    pub gravity: f32,
    /// Speed multiplier applied after integration (1.0 = no friction).
    pub friction: f32,
    /// Absolute horizontal speed cap.
    pub max_speed_x: f32,
    /// Absolute vertical speed cap.
    pub max_speed_y: f32,
    /// Edge length of a tile-map cell.
    pub tile_size: f32,
    /// Horizontal inset on each side of the mover during the vertical probe.
    /// Keeps a body walking past a ledge corner from snapping onto it.
    pub tile_roundness: f32,
    /// Speeds with a smaller magnitude snap to zero during integration.
    pub deadzone: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.3,
            friction: 0.94,
            max_speed_x: 2.5,
            max_speed_y: 4.5,
            tile_size: 16.0,
            tile_roundness: 2.0,
            deadzone: 0.1,
        }
    }
}

impl PhysicsConfig {
    /// Parse a config from a JSON string. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_max_speed(mut self, max_x: f32, max_y: f32) -> Self {
        self.max_speed_x = max_x;
        self.max_speed_y = max_y;
        self
    }

    pub fn with_tile_size(mut self, tile_size: f32) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn with_tile_roundness(mut self, roundness: f32) -> Self {
        self.tile_roundness = roundness;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_config() {
        let json = r#"{ "gravity": 0.5, "tile_size": 32 }"#;
        let config = PhysicsConfig::from_json(json).unwrap();
        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.tile_size, 32.0);
        assert_eq!(config.friction, PhysicsConfig::default().friction);
        assert_eq!(config.deadzone, 0.1);
    }

    #[test]
    fn parse_empty_object_is_default() {
        let config = PhysicsConfig::from_json("{}").unwrap();
        assert_eq!(config, PhysicsConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PhysicsConfig::from_json("{ gravity: }").is_err());
    }

    #[test]
    fn builder_overrides() {
        let config = PhysicsConfig::default()
            .with_gravity(1.0)
            .with_friction(1.0)
            .with_max_speed(3.0, 6.0);
        assert_eq!(config.gravity, 1.0);
        assert_eq!(config.friction, 1.0);
        assert_eq!(config.max_speed_x, 3.0);
        assert_eq!(config.max_speed_y, 6.0);
    }
}
