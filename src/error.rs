//! Errors raised by the hexagon model and the construction state.

use thiserror::Error;

/// Contract violations rejected by the Drom core.
///
/// Every operation that returns one of these leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DromError {
    #[error("edge index {0} is invalid (expected 0-5)")]
    InvalidEdge(usize),

    #[error("vertex index {0} is invalid (expected 0-5)")]
    InvalidVertex(usize),

    #[error("hexagon index {index} is out of range (the drom has {len} hexagons)")]
    OutOfRange { index: usize, len: usize },

    #[error("nothing to undo: no hexagon has been added since the last removal")]
    NoHistory,

    #[error("cannot remove the only hexagon of the drom")]
    LastHexagon,

    #[error("a drom needs at least one hexagon")]
    EmptyArrangement,
}
