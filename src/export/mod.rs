//! Document export for Droms.
//!
//! This module turns a [`DromState`](crate::drom::DromState) into a
//! standalone TikZ document, writes it to the output directory and, when
//! enabled, runs an external renderer on it. Rendering is best effort: the
//! `.tex` file is the primary artifact.

pub mod file;
pub mod render;
pub mod tikz;
pub mod types;

mod dependencies;
mod exporter;
#[cfg(test)]
mod tests;

pub use dependencies::{DocumentRenderer, DocumentWriter, ExportDependencies};
pub use exporter::Exporter;
pub use types::{DocumentStyle, ExportError, ExportOutcome, ExportRequest, RenderStatus};
