//! Transient contact tags.
//!
//! Producers: the resolver tags obstacles, the pipeline tags movers.
//! Consumers: walk flip removes LEFT/RIGHT, breakable growth removes BOTTOM
//! once the bump finishes. Anything else is left for game systems to clear.

use crate::api::types::Direction;

/// Bitset of sides currently in contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContactTags(u8);

impl ContactTags {
    pub const TOP: u8 = 1 << 0;
    pub const BOTTOM: u8 = 1 << 1;
    pub const LEFT: u8 = 1 << 2;
    pub const RIGHT: u8 = 1 << 3;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn has(self, tag: u8) -> bool {
        self.0 & tag == tag
    }

    /// True if any bit of `tags` is set.
    pub fn has_any(self, tags: u8) -> bool {
        self.0 & tags != 0
    }

    /// Idempotent.
    pub fn assign(&mut self, tag: u8) {
        self.0 |= tag;
    }

    pub fn remove(&mut self, tag: u8) {
        self.0 &= !tag;
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Tag for a resolved direction, `None` for `Direction::None`.
    pub fn tag_for(direction: Direction) -> Option<u8> {
        match direction {
            Direction::None => None,
            Direction::Top => Some(Self::TOP),
            Direction::Bottom => Some(Self::BOTTOM),
            Direction::Left => Some(Self::LEFT),
            Direction::Right => Some(Self::RIGHT),
        }
    }

    /// Assign the tag matching `direction`. No-op for `Direction::None`.
    pub fn assign_direction(&mut self, direction: Direction) {
        if let Some(tag) = Self::tag_for(direction) {
            self.assign(tag);
        }
    }
}
