//! # DirTree Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem access for DirTree. All reads of directory contents go through
//! the `listing` submodule so that sorting, entry classification, and the
//! mapping of I/O failures to `DirtreeError::DirectoryAccess` happen in one
//! place.
//!
//! ```rust
//! use crate::common::fs::listing;
//!
//! for entry in listing::read_sorted_entries(path)? {
//!     println!("{} (dir: {})", entry.name, entry.is_dir);
//! }
//! ```
//!

/// Sorted, classified listings of a single directory (`read_sorted_entries`).
pub mod listing;
