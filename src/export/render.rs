//! External renderer invocation (`pdflatex` by default).

use super::file::cleanup_aux_files;
use super::types::ExportError;
use crate::config::RenderConfig;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Runs the configured renderer on `tex_path` inside the document's directory.
///
/// The child is killed once `timeout_secs` elapses. Auxiliary files are
/// cleaned up whether or not the renderer succeeded.
pub fn run_renderer(tex_path: &Path, config: &RenderConfig) -> Result<PathBuf, ExportError> {
    let working_dir = tex_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = tex_path.file_name().ok_or_else(|| {
        ExportError::RenderFailed(format!("{} has no file name", tex_path.display()))
    })?;

    log::debug!(
        "Running {} {:?} on {}",
        config.binary,
        config.args,
        tex_path.display()
    );

    let mut child = Command::new(&config.binary)
        .args(&config.args)
        .arg(file_name)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| match err.kind() {
            ErrorKind::NotFound => ExportError::BinaryMissing(config.binary.clone()),
            _ => ExportError::Io(err),
        })?;

    let deadline = Instant::now() + Duration::from_secs(config.timeout_secs);
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() >= deadline {
            if let Err(err) = child.kill() {
                log::warn!("Failed to kill {}: {}", config.binary, err);
            }
            let _ = child.wait();
            if config.cleanup_aux {
                cleanup_aux_files(tex_path);
            }
            return Err(ExportError::RenderTimedOut {
                binary: config.binary.clone(),
                seconds: config.timeout_secs,
            });
        }
        thread::sleep(POLL_INTERVAL);
    };

    if config.cleanup_aux {
        cleanup_aux_files(tex_path);
    }

    if status.success() {
        Ok(tex_path.with_extension("pdf"))
    } else {
        Err(ExportError::RenderFailed(format!(
            "{} exited with {}",
            config.binary, status
        )))
    }
}
