//! Collision detection between axis-aligned boxes
//!
//! Standard AABB overlap, plus a horizontal tolerance so that a box grazing
//! another box's side edge (for example landing exactly on an obstacle's corner)
//! is not treated as a hit.

use super::entity::Aabb;
use crate::consts::EDGE_TOLERANCE;

/// Check whether two boxes collide
///
/// Both boxes must overlap on both axes, and the horizontal overlap must exceed
/// `EDGE_TOLERANCE` from either side. There is no vertical tolerance.
///
/// The comparison is in f32, so an overlap that is 0.01 in decimal terms can
/// round to just above `EDGE_TOLERANCE` (e.g. a 0.3-wide box at x = 0 against
/// one at x = 0.29) and count as a hit.
pub fn check_collision(a: &Aabb, b: &Aabb) -> bool {
    let x_overlap = a.left() < b.right() && a.right() > b.left();
    let y_overlap = a.bottom() < b.top() && a.top() > b.bottom();

    // Written as edge differences so swapping a and b swaps the two terms
    let x_beyond_tolerance =
        a.right() - b.left() > EDGE_TOLERANCE && b.right() - a.left() > EDGE_TOLERANCE;

    x_overlap && y_overlap && x_beyond_tolerance
}
