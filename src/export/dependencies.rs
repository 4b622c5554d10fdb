use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::config::RenderConfig;
use crate::export::{file, render, types::ExportError};

/// Abstraction over writing a finished document.
pub trait DocumentWriter: Send + Sync {
    fn write(&self, path: &Path, contents: &str) -> Result<(), ExportError>;
}

/// Abstraction over turning a written document into a viewable artifact.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, tex_path: &Path, config: &RenderConfig) -> Result<PathBuf, ExportError>;
}

/// Bundle of dependencies used by the exporter. Each component can be mocked in tests.
#[derive(Clone)]
pub struct ExportDependencies {
    pub writer: Arc<dyn DocumentWriter>,
    pub renderer: Arc<dyn DocumentRenderer>,
}

impl Default for ExportDependencies {
    fn default() -> Self {
        Self {
            writer: Arc::new(DefaultWriter),
            renderer: Arc::new(DefaultRenderer),
        }
    }
}

struct DefaultWriter;
struct DefaultRenderer;

impl DocumentWriter for DefaultWriter {
    fn write(&self, path: &Path, contents: &str) -> Result<(), ExportError> {
        file::write_document(path, contents)
    }
}

impl DocumentRenderer for DefaultRenderer {
    fn render(&self, tex_path: &Path, config: &RenderConfig) -> Result<PathBuf, ExportError> {
        render::run_renderer(tex_path, config)
    }
}
