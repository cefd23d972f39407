//! Filesystem helpers: HTML discovery and lenient reading.

use std::io;
use std::path::{Path, PathBuf};

use jwalk::WalkDir;

/// Recursively collect every `.html` file under `root`.
///
/// Walk order is unspecified; callers that need determinism sort their
/// own derived output.
pub fn collect_html_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "html")
        })
        .map(|e| e.path())
        .collect()
}

/// Read a file as text, replacing invalid UTF-8 sequences.
///
/// Malformed bytes must never abort a scan; only I/O failures surface.
pub fn read_text_lenient(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_finds_nested_html_only() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("index.html"), "").unwrap();
        fs::write(dir.path().join("a/b/page.html"), "").unwrap();
        fs::write(dir.path().join("a/style.css"), "").unwrap();
        fs::write(dir.path().join("a/readme.htm"), "").unwrap();

        let mut files = collect_html_files(dir.path());
        files.sort();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().is_some_and(|e| e == "html")));
    }

    #[test]
    fn test_collect_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(collect_html_files(dir.path()).is_empty());
    }

    #[test]
    fn test_read_text_lenient_replaces_bad_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.html");
        fs::write(&path, [b'<', 0xff, b'>']).unwrap();

        let text = read_text_lenient(&path).unwrap();
        assert!(text.starts_with('<'));
        assert!(text.ends_with('>'));
        assert!(text.contains('\u{fffd}'));
    }

    #[test]
    fn test_read_text_lenient_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        assert!(read_text_lenient(&dir.path().join("absent.html")).is_err());
    }
}
