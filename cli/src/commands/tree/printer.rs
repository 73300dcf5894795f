//! # DirTree Tree Printer
//!
//! File: cli/src/commands/tree/printer.rs
//!
//! ## Overview
//!
//! This module writes the box-drawing representation of a directory, one line
//! per filesystem entry, in pre-order (a directory's line comes before the
//! lines of its children, siblings in sorted order).
//!
//! ## Architecture
//!
//! - `TreePrinter::print_tree` lists a directory and walks it depth-first.
//!   Descent uses an explicit stack of `Level`s instead of recursion, so deep
//!   hierarchies cannot exhaust the call stack.
//! - Each `Level` owns the remaining siblings of one directory and the prefix
//!   its lines are written with. A level is dropped once its siblings run out.
//! - Symlinked directories are followed unless disabled. The canonical paths
//!   of the directories on the current ancestor chain are tracked so that a
//!   link back to an ancestor is printed but not descended into.
//! - `render_tree` is the top-level driver: header line, then `print_tree`
//!   with an empty prefix.
//!
//! Example output:
//!
//! ```text
//! project
//! ├── Cargo.toml
//! ├── src
//! │   ├── lib.rs
//! │   └── main.rs
//! └── tests
//!     └── cli.rs
//! ```
//!
use crate::common::fs::listing::{self, ListedEntry}; // Sorted directory listings
use crate::core::error::{DirtreeError, Result}; // Error kinds and anyhow Result
use std::{
    collections::HashSet,             // Canonical paths of the current ancestor chain
    io::Write,                        // Output sink (stdout lock or in-memory buffer)
    path::{Component, Path, PathBuf}, // Path handling and header normalization
    vec,                              // `vec::IntoIter` for per-level sibling iterators
};
use tracing::{debug, warn}; // Diagnostics on stderr

// --- Constants for Tree Drawing ---

/// Connector for every entry except the last in a listing.
const TEE: &str = "├── ";
/// Connector for the last entry in a listing.
const ELBOW: &str = "└── ";
/// Prefix token below a non-last entry (its siblings continue further down).
const PIPE: &str = "│   ";
/// Prefix token below the last entry.
const SPACER: &str = "    ";

/// Options controlling traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOptions {
    /// Descend into symlinked directories.
    pub follow_symlinks: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
        }
    }
}

/// One directory on the traversal stack.
struct Level {
    entries: vec::IntoIter<ListedEntry>,
    prefix: String,
    /// Canonical path registered in the ancestor set, removed when the level ends.
    guard: Option<PathBuf>,
}

/// Writes tree lines for directories to an output sink.
pub struct TreePrinter<W: Write> {
    out: W,
    options: TreeOptions,
    ancestors: HashSet<PathBuf>,
}

impl<W: Write> TreePrinter<W> {
    pub fn new(out: W, options: TreeOptions) -> Self {
        Self {
            out,
            options,
            ancestors: HashSet::new(),
        }
    }

    /// Consumes the printer and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// # Print Tree (`print_tree`)
    ///
    /// Prints every entry below `path`, each line starting with `prefix`.
    /// Lines are written as the traversal proceeds.
    ///
    /// ## Arguments
    ///
    /// * `path` - The directory whose contents are printed.
    /// * `prefix` - Indentation written before every connector at the top level.
    ///
    /// ## Returns
    ///
    /// * `Result<()>` - `Ok(())` once every entry has been written.
    /// * `Err` - `DirtreeError::DirectoryAccess` if a directory cannot be listed
    ///   (lines already written stay written, none are written for that
    ///   directory's children), or `DirtreeError::Output` if writing fails.
    pub fn print_tree(&mut self, path: &Path, prefix: &str) -> Result<()> {
        let result = self.walk(path, prefix);
        self.ancestors.clear();
        let flushed = self.out.flush();
        result?; // A traversal error takes precedence over a flush error.
        flushed.map_err(DirtreeError::from)?;
        Ok(())
    }

    fn walk(&mut self, path: &Path, prefix: &str) -> Result<()> {
        let entries = listing::read_sorted_entries(path)?;
        let mut stack = vec![Level {
            entries: entries.into_iter(),
            prefix: prefix.to_string(),
            guard: self.enter(path),
        }];

        while let Some(level) = stack.last_mut() {
            let Some(entry) = level.entries.next() else {
                if let Some(done) = stack.pop() {
                    self.leave(done.guard);
                }
                continue;
            };
            let is_last = level.entries.len() == 0; // Nothing left after this sibling.

            let connector = if is_last { ELBOW } else { TEE };
            writeln!(self.out, "{}{}{}", level.prefix, connector, entry.name)
                .map_err(DirtreeError::from)?;

            if !self.should_descend(&entry) {
                continue;
            }
            let child_prefix = format!(
                "{}{}",
                level.prefix,
                if is_last { SPACER } else { PIPE }
            );

            if entry.is_symlink && self.is_ancestor(&entry.path) {
                warn!(
                    "Detected symlink cycle at '{}'. Not descending.",
                    entry.path.display()
                );
                continue;
            }

            let children = listing::read_sorted_entries(&entry.path)?; // Stops the whole walk on failure.
            stack.push(Level {
                entries: children.into_iter(),
                prefix: child_prefix,
                guard: self.enter(&entry.path),
            });
        }

        Ok(())
    }

    fn should_descend(&self, entry: &ListedEntry) -> bool {
        if !entry.is_dir {
            return false;
        }
        if entry.is_symlink && !self.options.follow_symlinks {
            debug!("Not following symlinked directory '{}'", entry.path.display());
            return false;
        }
        true
    }

    /// Whether `path` resolves to a directory on the current ancestor chain.
    fn is_ancestor(&self, path: &Path) -> bool {
        match path.canonicalize() {
            Ok(canonical) => self.ancestors.contains(&canonical),
            Err(e) => {
                warn!(
                    "Could not canonicalize path '{}': {}. Skipping cycle check.",
                    path.display(),
                    e
                );
                false
            }
        }
    }

    /// Registers `dir` on the ancestor chain. Returns the key to release later.
    fn enter(&mut self, dir: &Path) -> Option<PathBuf> {
        if !self.options.follow_symlinks {
            return None;
        }
        match dir.canonicalize() {
            Ok(canonical) => {
                if self.ancestors.insert(canonical.clone()) {
                    Some(canonical)
                } else {
                    None
                }
            }
            Err(e) => {
                warn!(
                    "Could not canonicalize path '{}': {}. Cycle detection might be affected.",
                    dir.display(),
                    e
                );
                None
            }
        }
    }

    fn leave(&mut self, guard: Option<PathBuf>) {
        if let Some(canonical) = guard {
            self.ancestors.remove(&canonical);
        }
    }
}

/// Name printed on the header line for `root`.
///
/// Taken from the absolute, lexically normalized form of the path without
/// resolving symlinks, so `.` and `..` yield real directory names. A root
/// with no final component (such as `/`) is shown as given.
pub fn root_display_name(root: &Path) -> String {
    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    match normalized.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => root.display().to_string(),
    }
}

/// # Render Tree (`render_tree`)
///
/// Top-level driver: writes the header line (the root's base name) and then
/// the full tree of `root` with an empty prefix.
///
/// ## Arguments
///
/// * `root` - The directory to print.
/// * `out` - The sink lines are written to; returned on success.
/// * `options` - Traversal options (symlink following).
///
/// ## Returns
///
/// * `Result<W>` - The writer, after every line has been written and flushed.
/// * `Err` - Any error from `TreePrinter::print_tree`, or `DirtreeError::Output`
///   if the header cannot be written.
pub fn render_tree<W: Write>(root: &Path, out: W, options: TreeOptions) -> Result<W> {
    let mut printer = TreePrinter::new(out, options);
    writeln!(printer.out, "{}", root_display_name(root)).map_err(DirtreeError::from)?;
    printer.print_tree(root, "")?;
    Ok(printer.into_inner())
}

/// Renders the tree for `root` into a `String`.
#[cfg(test)]
pub fn render_tree_to_string(root: &Path, options: TreeOptions) -> Result<String> {
    let bytes = render_tree(root, Vec::new(), options)?;
    Ok(String::from_utf8(bytes)?)
}
