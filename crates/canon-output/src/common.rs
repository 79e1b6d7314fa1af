//! Shared helpers for atomic file output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{OutputError, Result};

/// Directory the destination lives in; `.` for bare file names.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<PathBuf> {
    let dir = parent_dir(path);
    fs::create_dir_all(&dir).map_err(|source| OutputError::CreateDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Write `path` through a temporary sibling file that is renamed into place
/// once `fill` succeeds. On any error the destination is left untouched.
pub fn write_atomic<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> Result<()>,
{
    let dir = ensure_parent_dir(path)?;
    let mut temp = NamedTempFile::new_in(&dir).map_err(|source| OutputError::TempFile {
        dir: dir.clone(),
        source,
    })?;

    fill(&mut temp)?;

    temp.flush().map_err(|source| OutputError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    temp.persist(path).map_err(|e| OutputError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_file_name_uses_current_dir() {
        assert_eq!(parent_dir(Path::new("out.csv")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("a/b/out.csv")), PathBuf::from("a/b"));
    }

    #[test]
    fn failed_fill_leaves_destination_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "previous").unwrap();

        let result = write_atomic(&path, |file| {
            file.write_all(b"partial").unwrap();
            Err(OutputError::Persist {
                path: path.clone(),
                source: std::io::Error::other("boom"),
            })
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
