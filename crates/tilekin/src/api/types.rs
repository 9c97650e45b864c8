/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Side of the mover that a resolver call put in contact with an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    pub fn is_none(self) -> bool {
        self == Direction::None
    }
}

/// A contact resolved during a tick, in the order the pipeline produced it.
///
/// `direction` is the mover's side that touched `obstacle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub mover: EntityId,
    pub obstacle: EntityId,
    pub direction: Direction,
    /// True when the obstacle came from the tile map rather than the
    /// entity-entity sweep.
    pub tile: bool,
}
