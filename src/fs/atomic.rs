//! Atomic file writes.
//!
//! 1. Write content to `.{filename}.tmp` in the target's directory
//! 2. Sync the file to disk
//! 3. Rename over the target
//!
//! `rename` replaces an existing target on every supported platform, and is
//! atomic when source and target share a filesystem, which a sibling temp
//! file guarantees. On a crash the temp file may remain.

use crate::error::{Result, SyncError, io_err};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories.
///
/// # Arguments
///
/// * `path` - Target file path
/// * `content` - Bytes to write
///
/// # Returns
///
/// * `Ok(())` - The target now holds exactly `content`
/// * `Err(SyncError::Io)` - A parent directory, the temp file, or the rename
///   failed; the target is left as it was
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_err(path, e));
    }

    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SyncError::Io {
            path: target.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid file path"),
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| io_err(path, e))?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(io_err(path, e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Libros Leidos.md");

        atomic_write_file(&file_path, "Leidos 0 libros\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "Leidos 0 libros\n");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("note.md");
        fs::write(&file_path, "original content").unwrap();

        atomic_write(&file_path, b"new content").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "new content");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested").join("dirs").join("books.json");

        atomic_write(&file_path, b"[]").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "[]");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("note.md");

        atomic_write(&file_path, b"content").unwrap();

        assert!(!temp_dir.path().join(".note.md.tmp").exists());
        let entries = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_atomic_write_below_a_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        let err = atomic_write(blocker.join("child.md"), b"x").unwrap_err();
        assert!(matches!(err, SyncError::Io { .. }));
    }

    #[test]
    fn test_generate_temp_path() {
        let temp = generate_temp_path(Path::new("/vault/Libros/Dune.md")).unwrap();

        assert_eq!(temp, Path::new("/vault/Libros/.Dune.md.tmp"));
    }
}
