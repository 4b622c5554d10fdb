//! Data types for document export.

use crate::config::ExportConfig;
use std::path::PathBuf;
use thiserror::Error;

/// Line styling and scale of the generated TikZ picture.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentStyle {
    /// `tikzpicture` scale (side length in cm)
    pub scale: f64,
    /// Line width for boundary edges
    pub boundary_line_width: String,
    /// Line width for the outline and shared edges
    pub interior_line_width: String,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for DocumentStyle {
    fn from(config: &ExportConfig) -> Self {
        Self {
            scale: config.scale,
            boundary_line_width: config.boundary_line_width.clone(),
            interior_line_width: config.interior_line_width.clone(),
        }
    }
}

/// What to export and how to annotate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// File stem (or path) of the document, relative to the output directory
    pub name: String,
    /// Label every hexagon with its index
    pub show_indices: bool,
    /// Label the edges of this hexagon with their numbers
    pub highlight_edges_of: Option<usize>,
    /// Run the external renderer afterwards (if enabled in config)
    pub render: bool,
}

impl ExportRequest {
    /// Final drawing: no labels.
    pub fn full(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            show_indices: false,
            highlight_edges_of: None,
            render: true,
        }
    }

    /// Editing view: hexagon indices plus the edges of `current`.
    pub fn annotated(name: impl Into<String>, current: usize) -> Self {
        Self {
            name: name.into(),
            show_indices: true,
            highlight_edges_of: Some(current),
            render: true,
        }
    }
}

/// Result of the best-effort render step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStatus {
    /// Rendering disabled or not requested.
    Skipped,
    /// Renderer succeeded; path of the expected output.
    Rendered(PathBuf),
    /// Renderer failed; the document itself was still written.
    Failed(String),
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Where the `.tex` document was written
    pub tex_path: PathBuf,
    /// What happened with the external renderer
    pub render: RenderStatus,
}

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Renderer '{0}' not found")]
    BinaryMissing(String),

    #[error("Renderer failed: {0}")]
    RenderFailed(String),

    #[error("Renderer '{binary}' timed out after {seconds}s")]
    RenderTimedOut { binary: String, seconds: u64 },
}
