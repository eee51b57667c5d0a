//! Axis-aligned bounding box collision test
//!
//! The single overlap predicate every other component uses. Pure function,
//! no side effects.

use super::actor::Actor;

/// True iff the two actors' bounding boxes intersect with positive area.
///
/// Boxes that merely touch along an edge do not overlap.
#[inline]
pub fn overlaps(a: &Actor, b: &Actor) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}
