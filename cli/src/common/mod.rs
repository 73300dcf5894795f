//! # DirTree Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers that are not tied to a particular command. Currently this
//! is the filesystem layer (`fs`), which provides sorted directory listings.
//!

/// Filesystem helpers (directory listing).
pub mod fs;
