use super::format::parse_document;
use crate::drom::DromState;
use crate::export::tikz;
use crate::export::{DocumentStyle, ExportRequest};
use crate::util::with_tex_extension;
use anyhow::{Context, Result};
use chrono::Utc;
use fs2::FileExt;
use log::{debug, info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Save `drom` as a plain drawing (no labels) at `path`.
///
/// Returns the path actually written, which has a `.tex` extension.
pub fn save_drom(path: &Path, drom: &DromState, style: &DocumentStyle) -> Result<PathBuf> {
    let request = ExportRequest {
        render: false,
        ..ExportRequest::full(path.to_string_lossy())
    };
    let contents = tikz::render_document(drom.hexagons(), &drom.edge_flags(), style, &request);
    save_document(path, &contents)
}

/// Persist an already rendered document, prefixed with a timestamp comment.
pub fn save_document(path: &Path, contents: &str) -> Result<PathBuf> {
    let target = with_tex_extension(path);
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let lock_file = open_lock(&target)?;
    lock_file
        .lock_exclusive()
        .with_context(|| format!("failed to lock {}", lock_path(&target).display()))?;

    let result = save_document_inner(&target, contents);

    release(&lock_file, &target);
    result.map(|()| target)
}

fn save_document_inner(target: &Path, contents: &str) -> Result<()> {
    let payload = format!(
        "% Saved by drom on {}\n{}",
        Utc::now().to_rfc3339(),
        contents
    );

    let tmp_path = temp_path(target);
    {
        let mut tmp_file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .with_context(|| format!("failed to open temporary file {}", tmp_path.display()))?;
        tmp_file
            .write_all(payload.as_bytes())
            .context("failed to write drom document")?;
        tmp_file
            .sync_all()
            .context("failed to sync temporary file")?;
    }

    fs::rename(&tmp_path, target).with_context(|| {
        format!(
            "failed to move temporary file {} -> {}",
            tmp_path.display(),
            target.display()
        )
    })?;

    info!("Drom saved to {} ({} bytes)", target.display(), payload.len());
    Ok(())
}

/// Load a Drom previously written by [`save_drom`] (or any export).
///
/// The current hexagon of the result is the last one in the file and the
/// undo history is empty.
pub fn load_drom(path: &Path) -> Result<DromState> {
    let target = with_tex_extension(path);
    if !target.exists() {
        anyhow::bail!("no drom document at {}", target.display());
    }

    let lock_file = open_lock(&target)?;
    lock_file.lock_shared().with_context(|| {
        format!(
            "failed to acquire shared lock {}",
            lock_path(&target).display()
        )
    })?;

    let result = fs::read_to_string(&target)
        .with_context(|| format!("failed to read {}", target.display()));

    release(&lock_file, &target);

    let contents = result?;
    let hexagons = parse_document(&contents)
        .with_context(|| format!("failed to parse {}", target.display()))?;
    let count = hexagons.len();
    let drom = DromState::from_hexagons(hexagons)
        .with_context(|| format!("{} contains no hexagons", target.display()))?;

    info!("Loaded {} hexagons from {}", count, target.display());
    Ok(drom)
}

fn lock_path(target: &Path) -> PathBuf {
    let mut raw = target.as_os_str().to_owned();
    raw.push(".lock");
    PathBuf::from(raw)
}

fn open_lock(target: &Path) -> Result<File> {
    let path = lock_path(target);
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&path)
        .with_context(|| format!("failed to open lock file {}", path.display()))
}

fn release(lock_file: &File, target: &Path) {
    lock_file.unlock().unwrap_or_else(|err| {
        warn!("failed to unlock {}: {}", lock_path(target).display(), err)
    });
}

fn temp_path(target: &Path) -> PathBuf {
    let mut candidate = target.with_extension("tex.tmp");
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_extension(format!("tex.tmp{}", counter));
    }
    debug!("Using temporary file {}", candidate.display());
    candidate
}
