//! Configuration type definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings for the generated TikZ document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// TikZ picture scale; the hexagon side length in cm (valid range: 0.1 - 10.0)
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Line width for edges with no neighbor (any TikZ length, e.g. "1mm")
    #[serde(default = "default_boundary_line_width")]
    pub boundary_line_width: String,

    /// Line width for edges shared with a neighbor
    #[serde(default = "default_interior_line_width")]
    pub interior_line_width: String,

    /// Directory the working document and renders are written to.
    /// Supports `~/` expansion.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// File stem of the working document refreshed after every edit
    #[serde(default = "default_working_name")]
    pub working_name: String,

    /// Label hexagons with their index in the working document
    #[serde(default = "default_show_indices")]
    pub show_indices: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            boundary_line_width: default_boundary_line_width(),
            interior_line_width: default_interior_line_width(),
            output_dir: default_output_dir(),
            working_name: default_working_name(),
            show_indices: default_show_indices(),
        }
    }
}

/// External renderer invocation.
///
/// Rendering is best effort: a missing binary, a non-zero exit or a timeout is
/// logged and otherwise ignored.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RenderConfig {
    /// Run the renderer after writing a document
    #[serde(default = "default_render_enabled")]
    pub enabled: bool,

    /// Renderer executable, looked up on PATH
    #[serde(default = "default_render_binary")]
    pub binary: String,

    /// Arguments passed before the document file name
    #[serde(default = "default_render_args")]
    pub args: Vec<String>,

    /// Seconds before the renderer is killed (valid range: 1 - 600)
    #[serde(default = "default_render_timeout")]
    pub timeout_secs: u64,

    /// Delete the renderer's `.aux` and `.log` files afterwards
    #[serde(default = "default_cleanup_aux")]
    pub cleanup_aux: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: default_render_enabled(),
            binary: default_render_binary(),
            args: default_render_args(),
            timeout_secs: default_render_timeout(),
            cleanup_aux: default_cleanup_aux(),
        }
    }
}

/// Geometry settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GeometryConfig {
    /// Componentwise tolerance when matching neighbor centers
    /// (valid range: 1e-12 - 1e-2)
    #[serde(default = "default_neighbor_tolerance")]
    pub neighbor_tolerance: f64,

    /// Position of vertex 0 of the seed hexagon as `[x, y]`
    #[serde(default = "default_seed")]
    pub seed: [f64; 2],
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            neighbor_tolerance: default_neighbor_tolerance(),
            seed: default_seed(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_scale() -> f64 {
    1.9
}

fn default_boundary_line_width() -> String {
    "1mm".to_string()
}

fn default_interior_line_width() -> String {
    "0.3mm".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_working_name() -> String {
    "Drom".to_string()
}

fn default_show_indices() -> bool {
    true
}

fn default_render_enabled() -> bool {
    true
}

fn default_render_binary() -> String {
    "pdflatex".to_string()
}

fn default_render_args() -> Vec<String> {
    vec!["-interaction=nonstopmode".to_string()]
}

fn default_render_timeout() -> u64 {
    60
}

fn default_cleanup_aux() -> bool {
    true
}

fn default_neighbor_tolerance() -> f64 {
    crate::hex::NEIGHBOR_TOLERANCE
}

fn default_seed() -> [f64; 2] {
    [0.0, 0.0]
}
