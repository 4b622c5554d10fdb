//! Writing documents and tidying renderer leftovers.

use super::types::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

/// Auxiliary files the renderer leaves next to the document.
const AUX_EXTENSIONS: [&str; 2] = ["aux", "log"];

/// Ensure the output directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.as_os_str().is_empty() && !directory.exists() {
        log::info!("Creating output directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(directory.to_path_buf())
}

/// Write a document, creating its parent directory first.
pub fn write_document(path: &Path, contents: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        ensure_directory_exists(parent)?;
    }

    fs::write(path, contents)?;
    log::debug!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// Remove `.aux`/`.log` files produced while rendering `tex_path`.
///
/// Returns how many files were removed. Missing files are not an error.
pub fn cleanup_aux_files(tex_path: &Path) -> usize {
    let mut removed = 0;
    for ext in AUX_EXTENSIONS {
        let path = tex_path.with_extension(ext);
        if path.exists() {
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(err) => log::warn!("Failed to remove {}: {}", path.display(), err),
            }
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_missing_directories() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("Drom.tex");
        write_document(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn cleanup_removes_only_aux_and_log() {
        let temp = tempfile::tempdir().unwrap();
        let tex = temp.path().join("Drom.tex");
        for ext in ["tex", "aux", "log", "pdf"] {
            fs::write(tex.with_extension(ext), "x").unwrap();
        }

        assert_eq!(cleanup_aux_files(&tex), 2);
        assert!(tex.exists());
        assert!(tex.with_extension("pdf").exists());
        assert!(!tex.with_extension("aux").exists());
        assert_eq!(cleanup_aux_files(&tex), 0);
    }
}
