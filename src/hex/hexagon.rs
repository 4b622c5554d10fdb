//! Unit hexagon template and placement.
//!
//! Every hexagon shares the same local vertex template: a regular hexagon with
//! side length 1, flat top and bottom, vertex 0 at the local origin and the
//! vertices numbered counter-clockwise starting at the bottom-left corner.
//!
//! ```text
//!         4 ______ 3
//!          /      \
//!       5 /        \ 2
//!         \        /
//!          \______/
//!         0        1
//! ```
//!
//! Edge `k` runs from vertex `k` to vertex `k + 1 (mod 6)`, so edge 0 is the
//! bottom side and the numbering continues counter-clockwise.

use super::point::Point;
use crate::error::DromError;

/// `sqrt(3)`, the distance across flats of a unit hexagon.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// `sqrt(3) / 2`, the apothem of a unit hexagon.
pub const HALF_SQRT_3: f64 = SQRT_3 / 2.0;

/// Local vertex template shared by every hexagon.
pub const LOCAL_VERTICES: [Point; 6] = [
    Point::new(0.0, 0.0),
    Point::new(1.0, 0.0),
    Point::new(1.5, HALF_SQRT_3),
    Point::new(1.0, SQRT_3),
    Point::new(0.0, SQRT_3),
    Point::new(-0.5, HALF_SQRT_3),
];

/// Offset from the anchor to the centroid.
pub const CENTER_OFFSET: Point = Point::new(0.5, HALF_SQRT_3);

/// Offsets from a center to the centers of the six edge-adjacent hexagons,
/// in edge order.
pub const NEIGHBOR_OFFSETS: [Point; 6] = [
    Point::new(0.0, -SQRT_3),
    Point::new(1.5, -HALF_SQRT_3),
    Point::new(1.5, HALF_SQRT_3),
    Point::new(0.0, SQRT_3),
    Point::new(-1.5, HALF_SQRT_3),
    Point::new(-1.5, -HALF_SQRT_3),
];

/// Number of vertices (and edges) of a hexagon.
pub const SIDES: usize = 6;

/// A unit hexagon placed in the drawing plane.
///
/// Hexagons are immutable once built; all derived positions are computed in
/// [`Hexagon::new`]. Gluing only overwrites the two shared corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Hexagon {
    anchor: Point,
    vertices: [Point; SIDES],
    center: Point,
    neighbor_centers: [Point; SIDES],
}

impl Hexagon {
    /// Places a hexagon so that its local vertex `pinned` lands on `target`.
    ///
    /// Vertices are computed relative to the pinned corner, so
    /// `vertices()[pinned]` is exactly `target` with no rounding. This is what
    /// lets two glued hexagons agree bit-for-bit on their shared corner.
    ///
    /// # Panics
    /// Panics if `pinned >= 6`; see [`Hexagon::try_new`] for a checked form.
    pub fn new(target: Point, pinned: usize) -> Self {
        Self::place(target, LOCAL_VERTICES[pinned])
    }

    /// Checked form of [`Hexagon::new`].
    pub fn try_new(target: Point, pinned: usize) -> Result<Self, DromError> {
        LOCAL_VERTICES
            .get(pinned)
            .map(|pin| Self::place(target, *pin))
            .ok_or(DromError::InvalidVertex(pinned))
    }

    fn place(target: Point, pin: Point) -> Self {
        let anchor = target - pin;
        let vertices = LOCAL_VERTICES.map(|local| target + (local - pin));
        let center = anchor + CENTER_OFFSET;
        let neighbor_centers = NEIGHBOR_OFFSETS.map(|offset| center + offset);

        Self {
            anchor,
            vertices,
            center,
            neighbor_centers,
        }
    }

    /// Replaces the endpoints of edge `index` with `start` and `end`.
    ///
    /// Gluing uses this to copy both corners of the shared side verbatim from
    /// the source hexagon.
    pub(crate) fn with_edge(mut self, index: usize, (start, end): (Point, Point)) -> Self {
        self.vertices[index] = start;
        self.vertices[(index + 1) % SIDES] = end;
        self
    }

    /// Hexagon with vertex 0 on `point`.
    pub fn at(point: Point) -> Self {
        Self::new(point, 0)
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn vertices(&self) -> &[Point; SIDES] {
        &self.vertices
    }

    /// Absolute position of vertex `index`.
    ///
    /// # Panics
    /// Panics if `index >= 6`.
    pub fn vertex(&self, index: usize) -> Point {
        self.vertices[index]
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn neighbor_centers(&self) -> &[Point; SIDES] {
        &self.neighbor_centers
    }

    /// Endpoints of edge `index`: vertex `index` and its counter-clockwise successor.
    ///
    /// # Panics
    /// Panics if `index >= 6`.
    pub fn edge(&self, index: usize) -> (Point, Point) {
        (self.vertices[index], self.vertices[(index + 1) % SIDES])
    }

    /// Midpoints of the six edges, in edge order.
    pub fn edge_midpoints(&self) -> [Point; SIDES] {
        std::array::from_fn(|k| {
            let (a, b) = self.edge(k);
            a.midpoint(&b)
        })
    }

    /// Distance from the center to every vertex (1 for the unit template).
    pub fn circumradius(&self) -> f64 {
        self.center.distance(&self.vertices[0])
    }
}

impl Default for Hexagon {
    fn default() -> Self {
        Self::at(Point::ORIGIN)
    }
}
