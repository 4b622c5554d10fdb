use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::config::{Config, RenderConfig};
use crate::drom::DromState;
use crate::export::{
    dependencies::ExportDependencies,
    tikz,
    types::{DocumentStyle, ExportError, ExportOutcome, ExportRequest, RenderStatus},
};
use crate::util::{expand_tilde, with_tex_extension};

/// Writes Drom documents into an output directory and optionally renders them.
#[derive(Clone)]
pub struct Exporter {
    output_dir: PathBuf,
    style: DocumentStyle,
    render_config: RenderConfig,
    neighbor_tolerance: f64,
    dependencies: Arc<ExportDependencies>,
}

impl Exporter {
    /// Creates an exporter with the real file writer and renderer.
    pub fn from_config(config: &Config) -> Self {
        Self::with_dependencies(config, ExportDependencies::default())
    }

    pub fn with_dependencies(config: &Config, dependencies: ExportDependencies) -> Self {
        Self {
            output_dir: expand_tilde(&config.export.output_dir),
            style: DocumentStyle::from(&config.export),
            render_config: config.render.clone(),
            neighbor_tolerance: config.geometry.neighbor_tolerance,
            dependencies: Arc::new(dependencies),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where a document called `name` ends up. A `.tex` extension is added when missing.
    pub fn document_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(with_tex_extension(Path::new(name)))
    }

    /// Builds the document text without touching the filesystem.
    pub fn document(&self, drom: &DromState, request: &ExportRequest) -> String {
        let flags = drom.edge_flags_with_tolerance(self.neighbor_tolerance);
        tikz::render_document(drom.hexagons(), &flags, &self.style, request)
    }

    /// Writes the document and, when requested and enabled, renders it.
    ///
    /// Only a failed write is an error; render problems end up in
    /// [`ExportOutcome::render`].
    pub fn export(
        &self,
        drom: &DromState,
        request: &ExportRequest,
    ) -> Result<ExportOutcome, ExportError> {
        let tex_path = self.document_path(&request.name);
        let contents = self.document(drom, request);
        self.dependencies.writer.write(&tex_path, &contents)?;
        log::info!(
            "Exported {} hexagons to {}",
            drom.len(),
            tex_path.display()
        );

        let render = if request.render {
            self.render_best_effort(&tex_path)
        } else {
            RenderStatus::Skipped
        };

        Ok(ExportOutcome { tex_path, render })
    }

    /// Runs the renderer, swallowing any failure into [`RenderStatus::Failed`].
    pub fn render_best_effort(&self, tex_path: &Path) -> RenderStatus {
        if !self.render_config.enabled {
            return RenderStatus::Skipped;
        }

        match self
            .dependencies
            .renderer
            .render(tex_path, &self.render_config)
        {
            Ok(output) => {
                log::debug!("Rendered {}", output.display());
                RenderStatus::Rendered(output)
            }
            Err(err) => {
                log::warn!("Rendering {} failed: {}", tex_path.display(), err);
                RenderStatus::Failed(err.to_string())
            }
        }
    }
}
