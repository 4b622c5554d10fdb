//! Boundary/interior classification of hexagon edges.
//!
//! Classification only drives line styling in the exported drawing. It never
//! affects geometry or blocks construction.

use super::hexagon::{Hexagon, SIDES};
use super::point::Point;

/// Default componentwise tolerance when matching neighbor centers.
///
/// Centers of glued hexagons drift by a few ULPs after long chains of
/// attachments; anything closer than this counts as the same position.
pub const NEIGHBOR_TOLERANCE: f64 = 1e-6;

/// Flags each edge of `hexagon` as boundary (`true`) or interior (`false`).
///
/// An edge is interior when some center in `all_centers` sits on the
/// corresponding neighbor center.
pub fn classify_edges(hexagon: &Hexagon, all_centers: &[Point]) -> [bool; SIDES] {
    classify_edges_with_tolerance(hexagon, all_centers, NEIGHBOR_TOLERANCE)
}

/// [`classify_edges`] with an explicit tolerance.
pub fn classify_edges_with_tolerance(
    hexagon: &Hexagon,
    all_centers: &[Point],
    tolerance: f64,
) -> [bool; SIDES] {
    hexagon.neighbor_centers().map(|neighbor| {
        !all_centers
            .iter()
            .any(|center| neighbor.approx_eq(center, tolerance))
    })
}
