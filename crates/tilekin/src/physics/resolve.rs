//! Directional collision resolver.
//!
//! One call corrects a mover against a single obstacle that is treated as
//! immovable. The vertical axis is resolved first using the pending vertical
//! speed; the horizontal axis is then probed with the already-corrected
//! vertical speed. Each axis picks its side by the smaller remaining distance.

use crate::api::config::PhysicsConfig;
use crate::api::types::Direction;
use crate::components::contact::ContactTags;
use crate::components::kinetic::Kinetic;
use crate::components::transform::Transform;
use crate::physics::aabb::overlaps;

/// Largest step of the horizontal push-out applied to an already
/// penetrating body.
const SOFT_CORRECTION: f32 = 0.5;

/// The static side of a resolver call.
pub struct Obstacle<'a> {
    pub transform: &'a Transform,
    /// Receives the tag of the obstacle's own side that was touched.
    pub contacts: &'a mut ContactTags,
}

impl<'a> Obstacle<'a> {
    pub fn new(transform: &'a Transform, contacts: &'a mut ContactTags) -> Self {
        Self { transform, contacts }
    }
}

/// Mover side for a vertical hit. Ties resolve upward (`Top`).
pub fn vertical_contact(distance_top: f32, distance_bottom: f32) -> Direction {
    if distance_top < distance_bottom {
        Direction::Bottom
    } else {
        Direction::Top
    }
}

/// Mover side for a horizontal hit. Ties resolve to `Right`.
pub fn horizontal_contact(distance_left: f32, distance_right: f32) -> Direction {
    if distance_left < distance_right {
        Direction::Left
    } else {
        Direction::Right
    }
}

/// Resolve `mover` against `obstacle` and report which side of the mover made
/// contact. Both axes may be corrected in one call; the horizontal report
/// wins when both fire. Returns `Direction::None` and leaves everything
/// untouched when neither probe overlaps.
pub fn resolve(
    mut obstacle: Obstacle<'_>,
    mover: &mut Transform,
    kinetic: &mut Kinetic,
    config: &PhysicsConfig,
) -> Direction {
    let solid = *obstacle.transform;
    let roundness = config.tile_roundness;
    let mut direction = Direction::None;

    // Y axis: current x, inset by the roundness on both sides.
    if overlaps(
        mover.x + roundness,
        mover.y + kinetic.speed_y,
        mover.w - roundness * 2.0,
        mover.h,
        &solid,
    ) {
        let distance_top = (solid.top() - (mover.bottom() + kinetic.speed_y)).abs();
        let distance_bottom = ((mover.top() + kinetic.speed_y) - solid.bottom()).abs();

        direction = match vertical_contact(distance_top, distance_bottom) {
            Direction::Bottom => {
                mover.set_bottom(solid.top());
                obstacle.contacts.assign(ContactTags::TOP);
                kinetic.acc_y = kinetic.acc_y.min(0.0);
                kinetic.speed_y = kinetic.speed_y.min(0.0);
                Direction::Bottom
            }
            _ => {
                mover.set_top(solid.bottom());
                obstacle.contacts.assign(ContactTags::BOTTOM);
                kinetic.acc_y = kinetic.acc_y.max(0.0);
                kinetic.speed_y = kinetic.speed_y.max(0.0);
                Direction::Top
            }
        };
    }

    // X axis: 1px trimmed off top and bottom so resting on a floor
    // never registers as a wall.
    if overlaps(
        mover.x + kinetic.speed_x,
        mover.y + kinetic.speed_y + 1.0,
        mover.w,
        mover.h - 2.0,
        &solid,
    ) {
        let distance_left = ((mover.left() + kinetic.speed_x) - solid.right()).abs();
        let distance_right = ((mover.right() + kinetic.speed_x) - solid.left()).abs();

        match horizontal_contact(distance_left, distance_right) {
            Direction::Left => {
                if mover.left() < solid.right() {
                    mover.x += SOFT_CORRECTION.min(solid.right() - mover.left());
                } else {
                    mover.set_left(solid.right());
                    obstacle.contacts.assign(ContactTags::RIGHT);
                    direction = Direction::Left;
                }
                kinetic.acc_x = kinetic.acc_x.max(0.0);
                kinetic.speed_x = kinetic.speed_x.max(0.0);
            }
            _ => {
                if mover.right() > solid.left() {
                    mover.x -= SOFT_CORRECTION.min(mover.right() - solid.left());
                } else {
                    mover.set_right(solid.left());
                    obstacle.contacts.assign(ContactTags::LEFT);
                    direction = Direction::Right;
                }
                kinetic.acc_x = kinetic.acc_x.min(0.0);
                kinetic.speed_x = kinetic.speed_x.min(0.0);
            }
        }
    }

    direction
}
