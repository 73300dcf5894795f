//! # DirTree Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout DirTree. Specific
//! failure kinds live in the `DirtreeError` enum (derived with `thiserror`),
//! while functions return the `Result<T>` alias over `anyhow::Error` so that
//! context can be attached on the way up to `main`.
//!
//! ## Architecture
//!
//! - `DirtreeError::DirectoryAccess`: a directory could not be listed
//!   (missing, permission denied, or not a directory).
//! - `DirtreeError::Output`: a tree line could not be written.
//! - `DirtreeError::Config`: invalid configuration, or no root directory given.
//!
//! ## Examples
//!
//! ```rust
//! let entries = fs::read_dir(dir).map_err(|source| DirtreeError::DirectoryAccess {
//!     path: dir.to_path_buf(),
//!     source,
//! })?;
//!
//! match result {
//!     Err(e) if matches!(
//!         e.downcast_ref::<DirtreeError>(),
//!         Some(DirtreeError::DirectoryAccess { .. })
//!     ) => { /* ... */ }
//!     _ => {}
//! }
//! ```
//!
use std::{io, path::PathBuf};
use thiserror::Error;

/// Custom error type for the DirTree application.
#[derive(Error, Debug)]
pub enum DirtreeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot list directory '{}': {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write tree output: {source}")]
    Output {
        #[from]
        source: io::Error,
    },
}

/// Type alias for Result using anyhow::Error for easy context addition.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = DirtreeError::Config("No root directory given".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: No root directory given"
        );

        let access_err = DirtreeError::DirectoryAccess {
            path: PathBuf::from("/srv/locked"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        assert_eq!(
            access_err.to_string(),
            "Cannot list directory '/srv/locked': Permission denied"
        );

        let output_err: DirtreeError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(
            output_err.to_string(),
            "Failed to write tree output: pipe closed"
        );
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = DirtreeError::DirectoryAccess {
            path: PathBuf::from("missing"),
            source: io::Error::from(io::ErrorKind::NotFound),
        }
        .into();
        let err = err.context("Failed while printing tree");
        assert!(matches!(
            err.downcast_ref::<DirtreeError>(),
            Some(DirtreeError::DirectoryAccess { .. })
        ));
    }
}
