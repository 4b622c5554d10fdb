//! Edge addressing and gluing new hexagons onto existing ones.

use super::hexagon::{Hexagon, SIDES};
use crate::error::DromError;
use std::fmt;
use std::str::FromStr;

/// One of the six sides of a hexagon, numbered from the bottom side
/// counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Edge 0, the bottom side
    Under,
    /// Edge 1
    BottomRight,
    /// Edge 2
    TopRight,
    /// Edge 3, the top side
    Over,
    /// Edge 4
    TopLeft,
    /// Edge 5
    BottomLeft,
}

/// Gluing table: for each edge, the source vertex the new hexagon is pinned
/// to and the local vertex of the new hexagon that gets pinned there.
const ADJACENCY: [(usize, usize); SIDES] = [(0, 4), (1, 5), (2, 0), (4, 0), (5, 1), (5, 3)];

impl Edge {
    /// All edges in index order.
    pub const ALL: [Edge; SIDES] = [
        Edge::Under,
        Edge::BottomRight,
        Edge::TopRight,
        Edge::Over,
        Edge::TopLeft,
        Edge::BottomLeft,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable direction name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Edge::Under => "under",
            Edge::BottomRight => "bottom-right",
            Edge::TopRight => "top-right",
            Edge::Over => "over",
            Edge::TopLeft => "top-left",
            Edge::BottomLeft => "bottom-left",
        }
    }

    /// Vertex of the source hexagon shared with the glued hexagon.
    pub fn shared_vertex(self) -> usize {
        ADJACENCY[self.index()].0
    }

    /// Local vertex of the glued hexagon pinned onto [`Edge::shared_vertex`].
    pub fn pinned_vertex(self) -> usize {
        ADJACENCY[self.index()].1
    }

    /// The same side seen from the hexagon on the other side.
    pub fn opposite(self) -> Edge {
        Edge::ALL[(self.index() + 3) % SIDES]
    }
}

impl TryFrom<usize> for Edge {
    type Error = DromError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Edge::ALL
            .get(index)
            .copied()
            .ok_or(DromError::InvalidEdge(index))
    }
}

impl FromStr for Edge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        if let Ok(index) = normalized.parse::<usize>() {
            return Edge::try_from(index).map_err(|err| err.to_string());
        }
        Edge::ALL
            .into_iter()
            .find(|edge| edge.name() == normalized)
            .ok_or_else(|| format!("unknown edge '{}'", s.trim()))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.index(), self.name())
    }
}

/// Builds the hexagon glued to `hexagon` along `edge`.
///
/// The new hexagon is pinned onto the source's shared vertex and both
/// endpoints of the shared edge are copied from the source, so they are
/// bit-identical in the two hexagons. The side runs the other way round on
/// the new hexagon.
pub fn attach(hexagon: &Hexagon, edge: Edge) -> Hexagon {
    let target = hexagon.vertex(edge.shared_vertex());
    let (start, end) = hexagon.edge(edge.index());
    Hexagon::new(target, edge.pinned_vertex()).with_edge(edge.opposite().index(), (end, start))
}

/// Index-based form of [`attach`]; rejects indices outside `0..6`.
pub fn attach_index(hexagon: &Hexagon, edge_index: usize) -> Result<Hexagon, DromError> {
    let edge = Edge::try_from(edge_index)?;
    Ok(attach(hexagon, edge))
}
