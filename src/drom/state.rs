//! Construction state machine for a drom.

use crate::error::DromError;
use crate::hex::{
    Edge, Hexagon, NEIGHBOR_TOLERANCE, Point, SIDES, attach, classify_edges_with_tolerance,
};
use log::debug;

/// Snapshot taken before an add, enabling a single level of undo.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The hexagon that was current before the add
    pub hexagon: Hexagon,
    /// Its index in the collection
    pub index: usize,
}

/// The arrangement under construction.
///
/// Holds the placed hexagons in insertion order, the index of the current
/// hexagon (the one the next add is glued to) and one level of undo history.
/// There is always at least one hexagon.
#[derive(Debug, Clone)]
pub struct DromState {
    hexagons: Vec<Hexagon>,
    current: usize,
    previous: Option<HistoryEntry>,
}

impl DromState {
    /// Starts a drom with a single seed hexagon whose vertex 0 sits on `seed`.
    pub fn new(seed: Point) -> Self {
        Self {
            hexagons: vec![Hexagon::at(seed)],
            current: 0,
            previous: None,
        }
    }

    /// Rebuilds a drom from already placed hexagons (e.g. after loading).
    ///
    /// The last hexagon becomes current and there is no undo history.
    pub fn from_hexagons(hexagons: Vec<Hexagon>) -> Result<Self, DromError> {
        if hexagons.is_empty() {
            return Err(DromError::EmptyArrangement);
        }
        let current = hexagons.len() - 1;
        Ok(Self {
            hexagons,
            current,
            previous: None,
        })
    }

    pub fn hexagons(&self) -> &[Hexagon] {
        &self.hexagons
    }

    pub fn len(&self) -> usize {
        self.hexagons.len()
    }

    /// Always false; a drom is never empty.
    pub fn is_empty(&self) -> bool {
        self.hexagons.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Hexagon {
        &self.hexagons[self.current]
    }

    pub fn history(&self) -> Option<&HistoryEntry> {
        self.previous.as_ref()
    }

    /// Glues a new hexagon onto edge `edge_index` of the current hexagon and
    /// makes it current. Returns the new hexagon's index.
    pub fn add_adjacent(&mut self, edge_index: usize) -> Result<usize, DromError> {
        let edge = Edge::try_from(edge_index)?;
        Ok(self.add_on(edge))
    }

    /// Typed form of [`DromState::add_adjacent`].
    pub fn add_on(&mut self, edge: Edge) -> usize {
        let source = self.current().clone();
        let hexagon = attach(&source, edge);

        self.previous = Some(HistoryEntry {
            hexagon: source,
            index: self.current,
        });
        self.hexagons.push(hexagon);
        self.current = self.hexagons.len() - 1;

        debug!(
            "Added hexagon {} on edge {} of hexagon {}",
            self.current,
            edge,
            self.previous.as_ref().map_or(0, |entry| entry.index)
        );
        self.current
    }

    /// Makes hexagon `index` current.
    pub fn switch_current(&mut self, index: usize) -> Result<(), DromError> {
        self.check_index(index)?;
        self.current = index;
        debug!("Switched current hexagon to {}", index);
        Ok(())
    }

    /// Undoes the most recent add, restoring the hexagon that was current
    /// before it. Only one level of undo is kept.
    pub fn remove_last(&mut self) -> Result<Hexagon, DromError> {
        let entry = self.previous.take().ok_or(DromError::NoHistory)?;
        let removed = self.hexagons.pop().ok_or(DromError::EmptyArrangement)?;
        self.current = entry.index;
        debug!("Removed last hexagon; current restored to {}", self.current);
        Ok(removed)
    }

    /// Removes hexagon `index`.
    ///
    /// The current index keeps tracking the same hexagon when another one is
    /// removed. When the current hexagon itself is removed, the hexagon saved
    /// in the undo history takes over if it is still present; otherwise the
    /// hexagon inserted just before the removed one does.
    pub fn remove_at(&mut self, index: usize) -> Result<Hexagon, DromError> {
        self.check_index(index)?;
        if self.hexagons.len() == 1 {
            return Err(DromError::LastHexagon);
        }

        let tracked = if index == self.current {
            match self.previous.as_ref() {
                Some(entry) if entry.index != index => entry.index,
                _ => index.saturating_sub(1),
            }
        } else {
            self.current
        };

        let removed = self.hexagons.remove(index);
        self.current = if tracked > index { tracked - 1 } else { tracked };
        self.previous = None;

        debug!(
            "Removed hexagon {}; current hexagon is now {}",
            index, self.current
        );
        Ok(removed)
    }

    /// Centers of every hexagon, in insertion order.
    pub fn centers(&self) -> Vec<Point> {
        self.hexagons.iter().map(Hexagon::center).collect()
    }

    /// Boundary flags for every hexagon, in insertion order.
    pub fn edge_flags(&self) -> Vec<[bool; SIDES]> {
        self.edge_flags_with_tolerance(NEIGHBOR_TOLERANCE)
    }

    /// [`DromState::edge_flags`] with an explicit matching tolerance.
    pub fn edge_flags_with_tolerance(&self, tolerance: f64) -> Vec<[bool; SIDES]> {
        let centers = self.centers();
        self.hexagons
            .iter()
            .map(|hexagon| classify_edges_with_tolerance(hexagon, &centers, tolerance))
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<(), DromError> {
        if index < self.hexagons.len() {
            Ok(())
        } else {
            Err(DromError::OutOfRange {
                index,
                len: self.hexagons.len(),
            })
        }
    }
}

impl Default for DromState {
    fn default() -> Self {
        Self::new(Point::ORIGIN)
    }
}
