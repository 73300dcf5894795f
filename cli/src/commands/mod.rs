//! # DirTree Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the command implementations invoked from `main.rs`.
//! DirTree has a single command, `tree`, which defines its own arguments
//! struct (`TreeArgs`) and handler (`handle_tree`).
//!

/// The directory tree command and its printer.
pub mod tree;
