//! Small helpers shared by the export, session and editor layers.

use std::path::{Path, PathBuf};

/// Formats a coordinate the way every document line renders it.
///
/// Uses the shortest representation that parses back to the same `f64`, so a
/// saved document reloads to bit-identical positions. Negative zero is
/// written as `0`.
pub fn format_coord(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Appends `.tex` to `path` unless it already has that extension.
pub fn with_tex_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == "tex" => path.to_path_buf(),
        _ => {
            let mut raw = path.as_os_str().to_owned();
            raw.push(".tex");
            PathBuf::from(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_round_trip_exactly() {
        for value in [0.8660254037844386, -1.5, 1.0 / 3.0, 1e-17, 12345.678] {
            let text = format_coord(value);
            assert_eq!(text.parse::<f64>().unwrap(), value);
        }
    }

    #[test]
    fn zero_has_one_spelling() {
        assert_eq!(format_coord(0.0), "0");
        assert_eq!(format_coord(-0.0), "0");
        assert_eq!(format_coord(1.5), "1.5");
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Documents");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn tex_extension_added_once() {
        assert_eq!(
            with_tex_extension(Path::new("out/MyDrom")),
            PathBuf::from("out/MyDrom.tex")
        );
        assert_eq!(
            with_tex_extension(Path::new("MyDrom.tex")),
            PathBuf::from("MyDrom.tex")
        );
        assert_eq!(
            with_tex_extension(Path::new("v1.2")),
            PathBuf::from("v1.2.tex")
        );
    }
}
