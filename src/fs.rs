//! Output-file primitives.
//!
//! Whole responses replace the output file; streamed responses append one
//! fragment at a time. The two write modes live here so the consumer only
//! deals with errors, not file-handle bookkeeping.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Replaces the file contents atomically using a temp file and rename.
///
/// This prevents a half-written file if the process is interrupted
/// (e.g. Ctrl+C). The temp file is created in the same directory as the
/// target so the rename stays on one filesystem.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Appends a fragment to the file, creating it if needed.
///
/// The handle is opened and closed per call; no lock is held across the
/// whole stream.
pub fn append(path: &Path, fragment: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(fragment.as_bytes())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.rs");

        atomic_write(&file_path, "fn main() {}").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "fn main() {}");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.rs");

        fs::write(&file_path, "old content").unwrap();
        atomic_write(&file_path, "new content").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "new content");
    }

    #[test]
    fn test_atomic_write_no_temp_file_remains() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.rs");

        atomic_write(&file_path, "content").unwrap();

        let temp_path = temp_dir.path().join(".out.rs.tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_append_creates_then_accumulates() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.rs");

        append(&file_path, "let x").unwrap();
        append(&file_path, " = 1;").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "let x = 1;");
    }

    #[test]
    fn test_append_empty_fragment_is_noop_on_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.rs");

        append(&file_path, "abc").unwrap();
        append(&file_path, "").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "abc");
    }

    #[test]
    fn test_append_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing").join("out.rs");

        assert!(append(&file_path, "abc").is_err());
    }
}
