//! The drom under construction and its edit operations.

mod state;
#[cfg(test)]
mod tests;

pub use state::{DromState, HistoryEntry};
