//! Saving and loading Droms.
//!
//! A saved Drom is an ordinary TikZ document. Each hexagon is recovered from
//! the first vertex of the outline following its `%hex` marker, so a reload
//! keeps positions but not how hexagons were glued together. Writes go through
//! a temporary file and a lock file next to the target.

mod format;
mod snapshot;

pub use format::parse_document;
pub use snapshot::{load_drom, save_document, save_drom};
