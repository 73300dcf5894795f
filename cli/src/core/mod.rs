//! # DirTree Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by the command
//! modules:
//! - `config`: Loading, merging and validating `.dirtree.toml` / user config
//! - `error`: The `DirtreeError` enum and the `Result` alias
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{DirtreeError, Result};
//! ```
//!
pub mod config;
pub mod error;
