//! # DirTree Directory Listing
//!
//! File: cli/src/common/fs/listing.rs
//!
//! ## Overview
//!
//! Reads the immediate children of one directory and returns them sorted by
//! name. The directory handle is opened, drained and dropped inside
//! `read_sorted_entries`, so no handle outlives a single listing.
//!
//! ## Classification
//!
//! Each entry is classified as a directory or a leaf. The check follows
//! symlinks, so a link to a directory counts as a directory. Entries whose
//! metadata cannot be read (e.g. broken symlinks) are treated as leaves.
//!
use crate::core::error::DirtreeError; // DirectoryAccess on listing failures
use std::{
    ffi::OsString,         // Raw file names, used as the sort key
    fs,                    // read_dir and metadata
    path::{Path, PathBuf}, // Filesystem path types
};
use tracing::{debug, trace}; // Diagnostics for unreadable metadata

/// A single child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    /// The entry's file name, rendered lossily as UTF-8 for display.
    pub name: String,
    /// Full path of the entry (the listed directory joined with the file name).
    pub path: PathBuf,
    /// Whether the entry is a directory, following symlinks.
    pub is_dir: bool,
    /// Whether the entry itself is a symbolic link.
    pub is_symlink: bool,
}

/// # Read Sorted Entries (`read_sorted_entries`)
///
/// Lists `dir` and returns its children sorted by raw file name. Hidden
/// entries are included and directories are not grouped first.
///
/// ## Arguments
///
/// * `dir` - The directory to list.
///
/// ## Returns
///
/// * `Ok(Vec<ListedEntry>)` - Every child of `dir`, sorted.
/// * `Err(DirtreeError::DirectoryAccess)` - If `dir` cannot be opened (missing,
///   permission denied, not a directory) or reading any of its entries fails.
pub fn read_sorted_entries(dir: &Path) -> Result<Vec<ListedEntry>, DirtreeError> {
    let access_error = |source| DirtreeError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    };

    let mut raw: Vec<(OsString, ListedEntry)> = Vec::new();
    for entry_result in fs::read_dir(dir).map_err(access_error)? {
        let entry = entry_result.map_err(access_error)?;
        let file_name = entry.file_name();
        let path = entry.path();

        let is_symlink = entry
            .file_type()
            .map(|file_type| file_type.is_symlink())
            .unwrap_or(false);
        let is_dir = match fs::metadata(&path) {
            Ok(metadata) => metadata.is_dir(),
            Err(e) => {
                debug!(
                    "Could not get metadata for '{}': {}. Listing as a file.",
                    path.display(),
                    e
                );
                false
            }
        };

        let listed = ListedEntry {
            name: file_name.to_string_lossy().into_owned(),
            path,
            is_dir,
            is_symlink,
        };
        raw.push((file_name, listed));
    }

    raw.sort_by(|(a, _), (b, _)| a.cmp(b)); // Byte order of the raw names
    trace!("Listed {} entries in '{}'", raw.len(), dir.display());
    Ok(raw.into_iter().map(|(_, entry)| entry).collect())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tempfile::tempdir;

    #[test]
    fn test_entries_sorted_by_name() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::write(root.join("b"), "")?;
        fs::write(root.join("a"), "")?;
        fs::create_dir(root.join("c"))?;
        fs::write(root.join("Z"), "")?;
        fs::write(root.join(".hidden"), "")?;

        let entries = read_sorted_entries(root)?;
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

        // Plain byte order: '.' < uppercase < lowercase, no directory grouping.
        assert_eq!(names, vec![".hidden", "Z", "a", "b", "c"]);
        assert!(entries[4].is_dir);
        assert!(!entries[0].is_dir);
        assert_eq!(entries[2].path, root.join("a"));
        Ok(())
    }

    #[test]
    fn test_empty_directory() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        assert!(read_sorted_entries(temp_dir.path())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_directory_is_access_error() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("gone");

        let err = read_sorted_entries(&missing).unwrap_err();
        match err {
            DirtreeError::DirectoryAccess { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_file_is_access_error() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "content").unwrap();

        assert!(matches!(
            read_sorted_entries(&file),
            Err(DirtreeError::DirectoryAccess { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_classification() -> anyhow::Result<()> {
        use std::os::unix::fs as unix_fs;

        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::create_dir(root.join("real"))?;
        unix_fs::symlink(root.join("real"), root.join("to_dir"))?;
        unix_fs::symlink(root.join("nowhere"), root.join("broken"))?;

        let entries = read_sorted_entries(root)?;
        let find = |name: &str| entries.iter().find(|e| e.name == name).unwrap();

        assert!(find("to_dir").is_dir);
        assert!(find("to_dir").is_symlink);
        assert!(!find("broken").is_dir);
        assert!(find("broken").is_symlink);
        assert!(find("real").is_dir);
        assert!(!find("real").is_symlink);
        Ok(())
    }
}
