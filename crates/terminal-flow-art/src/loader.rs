//! Listing and decoding art files.

use std::fs;
use std::path::{Path, PathBuf};

use terminal_flow_core::ArtGrid;

use crate::ArtError;

/// File extension of art files.
pub const ART_EXTENSION: &str = "txt";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// List the art files in `dir`, sorted by path.
pub fn list_available(dir: &Path) -> Result<Vec<PathBuf>, ArtError> {
    if !dir.is_dir() {
        return Err(ArtError::DirectoryNotFound(dir.to_path_buf()));
    }

    let io_err = |source| ArtError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_art = path.extension().is_some_and(|ext| ext == ART_EXTENSION);
        if is_art && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    tracing::debug!(dir = %dir.display(), count = files.len(), "listed art files");
    Ok(files)
}

/// Read and decode one art file.
pub fn load(path: &Path) -> Result<ArtGrid, ArtError> {
    let bytes = fs::read(path).map_err(|err| ArtError::UnreadableFile {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let text = decode(&bytes).ok_or_else(|| ArtError::UnreadableFile {
        path: path.to_path_buf(),
        reason: "not a text file".to_string(),
    })?;

    let grid = ArtGrid::from_text(&text);
    tracing::debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "loaded art"
    );
    Ok(grid)
}

/// Decode raw file bytes as text.
///
/// UTF-8 is tried first (a leading BOM is dropped), then Latin-1. Bytes
/// holding control codes other than tab, CR and LF are not text at all.
pub fn decode(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let is_binary = bytes
        .iter()
        .any(|&b| b.is_ascii_control() && !matches!(b, b'\t' | b'\r' | b'\n'));
    if is_binary {
        return None;
    }
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some(text.to_string());
    }
    Some(bytes.iter().map(|&b| char::from(b)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_list_is_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("notes.md"), "skip").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let files = list_available(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            list_available(&missing),
            Err(ArtError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_decode_strips_bom() {
        assert_eq!(decode(b"\xEF\xBB\xBFhi").as_deref(), Some("hi"));
    }

    #[test]
    fn test_decode_latin1_fallback() {
        // 0xE9 is 'é' in Latin-1 and invalid on its own in UTF-8.
        assert_eq!(decode(b"caf\xE9\n").as_deref(), Some("café\n"));
    }

    #[test]
    fn test_decode_rejects_binary() {
        assert_eq!(decode(b"\x00\x01\xFF\xFE"), None);
        assert_eq!(decode(b"a\x00\x07\x08b"), None);
        // A raw escape would reach the terminal as a live sequence.
        assert_eq!(decode(b"\x1B[2J\x1B[H"), None);
        assert_eq!(decode(b"\x1B[1m\xB0"), None);
        assert_eq!(decode(b"tab\there\r\n").as_deref(), Some("tab\there\r\n"));
    }

    #[test]
    fn test_load_builds_grid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cat.txt");
        fs::write(&path, "\r\n /\\_/\\\r\n( o.o )\r\n\r\n").unwrap();

        let grid = load(&path).unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 7);
    }

    #[test]
    fn test_load_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.txt");
        fs::write(&path, [0u8, 159, 146, 150]).unwrap();
        assert!(matches!(load(&path), Err(ArtError::UnreadableFile { .. })));
    }

    #[test]
    fn test_load_rejects_terminal_escapes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clear.txt");
        fs::write(&path, "ab\u{1b}[2Jcd\n").unwrap();
        assert!(matches!(load(&path), Err(ArtError::UnreadableFile { .. })));
    }
}
