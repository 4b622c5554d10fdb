//! Hexagon geometry: points, the unit template, edge gluing and neighbor
//! detection.
//!
//! - [`Hexagon`]: a unit hexagon placed by pinning one of its corners
//! - [`Edge`] / [`attach`]: glue a new hexagon onto a side of an existing one
//! - [`classify_edges`]: boundary vs. interior edges for line styling

pub mod edge;
pub mod hexagon;
pub mod neighbors;
pub mod point;

pub use edge::{Edge, attach, attach_index};
pub use hexagon::{Hexagon, LOCAL_VERTICES, SIDES};
pub use neighbors::{NEIGHBOR_TOLERANCE, classify_edges, classify_edges_with_tolerance};
pub use point::Point;
