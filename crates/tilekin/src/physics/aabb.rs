use crate::components::transform::Transform;

/// Inclusive AABB test: rectangles that only touch still overlap.
///
/// The candidate is passed as loose coordinates so callers can probe a
/// position the body has not moved to yet.
pub fn overlaps(x: f32, y: f32, w: f32, h: f32, other: &Transform) -> bool {
    x <= other.right() && x + w >= other.left() && y <= other.bottom() && y + h >= other.top()
}

/// [`overlaps`] for two concrete rectangles.
pub fn overlaps_rect(a: &Transform, b: &Transform) -> bool {
    overlaps(a.x, a.y, a.w, a.h, b)
}
