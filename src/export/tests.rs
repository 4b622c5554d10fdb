use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use super::{
    dependencies::{DocumentRenderer, DocumentWriter, ExportDependencies},
    exporter::Exporter,
    tikz::{HEX_MARKER, coord},
    types::{ExportError, ExportRequest, RenderStatus},
};
use crate::config::{Config, RenderConfig};
use crate::drom::DromState;
use crate::hex::{Edge, Point};

#[derive(Clone, Default)]
struct MockWriter {
    should_fail: bool,
    written: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl DocumentWriter for MockWriter {
    fn write(&self, path: &Path, contents: &str) -> Result<(), ExportError> {
        if self.should_fail {
            return Err(ExportError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )));
        }
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}

#[derive(Clone, Default)]
struct MockRenderer {
    should_fail: bool,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl DocumentRenderer for MockRenderer {
    fn render(&self, tex_path: &Path, _config: &RenderConfig) -> Result<PathBuf, ExportError> {
        self.calls.lock().unwrap().push(tex_path.to_path_buf());
        if self.should_fail {
            Err(ExportError::BinaryMissing("pdflatex".to_string()))
        } else {
            Ok(tex_path.with_extension("pdf"))
        }
    }
}

fn config(output_dir: &str, render: bool) -> Config {
    let mut config = Config::default();
    config.export.output_dir = output_dir.to_string();
    config.render.enabled = render;
    config
}

fn exporter(config: &Config, writer: &MockWriter, renderer: &MockRenderer) -> Exporter {
    Exporter::with_dependencies(
        config,
        ExportDependencies {
            writer: Arc::new(writer.clone()),
            renderer: Arc::new(renderer.clone()),
        },
    )
}

fn three_hexagons() -> DromState {
    let mut drom = DromState::default();
    drom.add_on(Edge::Under);
    drom.add_on(Edge::TopRight);
    drom
}

#[test]
fn export_writes_document_into_output_dir() {
    let writer = MockWriter::default();
    let renderer = MockRenderer::default();
    let exporter = exporter(&config("out", true), &writer, &renderer);

    let outcome = exporter
        .export(&three_hexagons(), &ExportRequest::full("final"))
        .unwrap();

    assert_eq!(outcome.tex_path, PathBuf::from("out").join("final.tex"));
    assert_eq!(
        outcome.render,
        RenderStatus::Rendered(PathBuf::from("out").join("final.pdf"))
    );

    let written = writer.written.lock().unwrap();
    assert_eq!(written.len(), 1);
    let (path, contents) = &written[0];
    assert_eq!(path, &outcome.tex_path);
    assert_eq!(contents.lines().filter(|l| *l == HEX_MARKER).count(), 3);
    assert_eq!(renderer.calls.lock().unwrap().len(), 1);
}

#[test]
fn existing_tex_extension_is_kept() {
    let exporter = Exporter::from_config(&config("out", false));
    assert_eq!(exporter.output_dir(), Path::new("out"));
    assert_eq!(
        exporter.document_path("drawing.tex"),
        PathBuf::from("out").join("drawing.tex")
    );
    assert_eq!(
        exporter.document_path("drawing"),
        PathBuf::from("out").join("drawing.tex")
    );
}

#[test]
fn render_failure_does_not_fail_export() {
    let writer = MockWriter::default();
    let renderer = MockRenderer {
        should_fail: true,
        ..Default::default()
    };
    let exporter = exporter(&config(".", true), &writer, &renderer);

    let outcome = exporter
        .export(&DromState::default(), &ExportRequest::full("Drom"))
        .unwrap();

    assert!(matches!(outcome.render, RenderStatus::Failed(msg) if msg.contains("pdflatex")));
    assert_eq!(writer.written.lock().unwrap().len(), 1);
}

#[test]
fn disabled_rendering_skips_renderer() {
    let writer = MockWriter::default();
    let renderer = MockRenderer::default();
    let exporter = exporter(&config(".", false), &writer, &renderer);

    let outcome = exporter
        .export(&DromState::default(), &ExportRequest::full("Drom"))
        .unwrap();

    assert_eq!(outcome.render, RenderStatus::Skipped);
    assert!(renderer.calls.lock().unwrap().is_empty());
}

#[test]
fn request_without_render_skips_renderer() {
    let writer = MockWriter::default();
    let renderer = MockRenderer::default();
    let exporter = exporter(&config(".", true), &writer, &renderer);

    let mut request = ExportRequest::annotated("Drom", 0);
    request.render = false;
    let outcome = exporter.export(&DromState::default(), &request).unwrap();

    assert_eq!(outcome.render, RenderStatus::Skipped);
    assert!(renderer.calls.lock().unwrap().is_empty());
}

#[test]
fn write_failure_is_an_error_and_skips_render() {
    let writer = MockWriter {
        should_fail: true,
        ..Default::default()
    };
    let renderer = MockRenderer::default();
    let exporter = exporter(&config(".", true), &writer, &renderer);

    let err = exporter
        .export(&DromState::default(), &ExportRequest::full("Drom"))
        .unwrap_err();

    assert!(matches!(err, ExportError::Io(_)));
    assert!(renderer.calls.lock().unwrap().is_empty());
}

#[test]
fn annotated_document_labels_current_edges() {
    let exporter = Exporter::from_config(&config(".", false));
    let drom = three_hexagons();

    let doc = exporter.document(&drom, &ExportRequest::annotated("Drom", drom.current_index()));

    assert_eq!(doc.lines().filter(|l| l.starts_with(r"\node[draw]")).count(), 3);
    assert_eq!(doc.lines().filter(|l| l.starts_with(r"\node at")).count(), 6);
}

#[test]
fn shared_edges_get_no_boundary_stroke() {
    let exporter = Exporter::from_config(&config(".", false));
    let mut drom = DromState::default();
    drom.add_on(Edge::Under);

    let doc = exporter.document(&drom, &ExportRequest::full("Drom"));
    let boundary = doc
        .lines()
        .filter(|l| l.starts_with(r"\draw [line width=1mm]"))
        .count();

    assert_eq!(boundary, 10);
}

#[test]
fn real_writer_creates_file_on_disk() {
    let temp = tempfile::tempdir().unwrap();
    let config = config(temp.path().to_str().unwrap(), false);
    let exporter = Exporter::from_config(&config);

    let outcome = exporter
        .export(&DromState::default(), &ExportRequest::full("Drom"))
        .unwrap();

    let contents = std::fs::read_to_string(&outcome.tex_path).unwrap();
    assert!(contents.contains(HEX_MARKER));
    assert_eq!(outcome.tex_path, temp.path().join("Drom.tex"));
}

#[test]
fn glued_hexagons_print_shared_corners_identically() {
    let exporter = Exporter::from_config(&config(".", false));
    let mut drom = DromState::new(Point::new(0.1, 0.2));
    drom.add_on(Edge::BottomLeft);
    let (start, end) = drom.hexagons()[0].edge(Edge::BottomLeft.index());

    let doc = exporter.document(&drom, &ExportRequest::full("Drom"));
    let outlines: Vec<&str> = doc
        .lines()
        .filter(|l| l.ends_with("-- cycle;"))
        .collect();

    assert_eq!(outlines.len(), 2);
    for outline in outlines {
        assert!(outline.contains(&coord(&start)), "{outline}");
        assert!(outline.contains(&coord(&end)), "{outline}");
    }
    assert!(!doc.contains("0.09999999999999998"));
}
