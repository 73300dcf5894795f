//! # DirTree Tree Command
//!
//! File: cli/src/commands/tree/mod.rs
//!
//! ## Overview
//!
//! This module implements the `dirtree` command itself: it resolves which
//! directory to print, combines command-line flags with the loaded
//! configuration, and hands the work to the `printer` submodule, which writes
//! straight to standard output.
//!
//! ## Root Resolution
//!
//! The root directory is taken from, in order:
//! 1. The positional `PATH` argument
//! 2. The `DIRTREE_ROOT` environment variable (handled by clap)
//! 3. `tree.default_root` in the configuration
//!
//! If none is set the command fails before printing anything.
//!
//! When PATH (or `DIRTREE_ROOT`) is given, a configuration file that cannot
//! be loaded only produces a warning and built-in defaults are used. Without
//! an explicit root the configuration is required and its errors are fatal.
//!
//! ## Examples
//!
//! ```bash
//! dirtree ./src
//! DIRTREE_ROOT=~/projects dirtree
//! dirtree --no-follow-symlinks /srv/data
//! ```
//!
use crate::core::config::{self, Config}; // Configuration loading
use crate::core::error::{DirtreeError, Result}; // Error kinds and anyhow Result
use anyhow::anyhow; // Error construction
use clap::Parser; // Argument parsing
use std::{io, path::PathBuf}; // Stdout handle and root path
use tracing::{debug, info, warn}; // Logging

/// Writes the box-drawing tree for a directory.
pub mod printer;

use printer::TreeOptions;

/// # Tree Arguments (`TreeArgs`)
///
/// Command-line arguments accepted by `dirtree`.
#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Directory to print. Falls back to `tree.default_root` from the configuration.
    #[arg(env = "DIRTREE_ROOT")]
    pub path: Option<PathBuf>,

    /// Print symlinked directories as leaves instead of descending into them.
    #[arg(long)]
    pub no_follow_symlinks: bool,
}

/// # Handle Tree Command (`handle_tree`)
///
/// Loads configuration, resolves the root directory and prints its tree to
/// standard output.
///
/// ## Arguments
///
/// * `args` - The parsed `TreeArgs`.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` once the whole tree has been printed.
/// * `Err` - `DirtreeError::Config` if no root was given (or configuration
///   needed to find it is invalid), `DirtreeError::DirectoryAccess` if any
///   directory in the tree cannot be listed, `DirtreeError::Output` if
///   standard output cannot be written.
pub fn handle_tree(args: TreeArgs) -> Result<()> {
    let cfg = settle_config(config::load_config(), args.path.is_some())?;
    let (root, options) = resolve(args, &cfg)?;
    info!("Printing tree for '{}'", root.display());
    debug!("Tree options: {:?}", options);

    let stdout = io::stdout();
    printer::render_tree(&root, stdout.lock(), options)?;
    Ok(())
}

/// Decides what a configuration load failure means for this run.
///
/// With an explicit root the failure is logged and defaults are used;
/// otherwise it is returned with context.
fn settle_config(loaded: Result<Config>, has_explicit_root: bool) -> Result<Config> {
    match loaded {
        Ok(cfg) => Ok(cfg),
        Err(e) if has_explicit_root => {
            warn!("Ignoring configuration that failed to load: {:#}", e);
            Ok(Config::default())
        }
        Err(e) => Err(e.context("Failed to load DirTree configuration")),
    }
}

/// Combines command-line arguments with configuration.
fn resolve(args: TreeArgs, cfg: &Config) -> Result<(PathBuf, TreeOptions)> {
    let root = match args.path {
        Some(path) => path,
        None => cfg
            .tree
            .default_root
            .as_ref()
            .map(PathBuf::from)
            .ok_or_else(|| {
                anyhow!(DirtreeError::Config(
                    "No directory given. Pass PATH, set DIRTREE_ROOT, or configure tree.default_root."
                        .to_string()
                ))
            })?,
    };

    let options = TreeOptions {
        follow_symlinks: !args.no_follow_symlinks && cfg.tree.follow_symlinks(),
    };
    Ok((root, options))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TreeConfig;

    fn args(path: Option<&str>, no_follow_symlinks: bool) -> TreeArgs {
        TreeArgs {
            path: path.map(PathBuf::from),
            no_follow_symlinks,
        }
    }

    #[test]
    fn test_settle_config_with_explicit_root_uses_defaults() -> Result<()> {
        let broken: Result<Config> = Err(anyhow!("Failed to parse TOML from file: x"));
        let cfg = settle_config(broken, true)?;
        assert_eq!(cfg, Config::default());
        Ok(())
    }

    #[test]
    fn test_settle_config_without_root_is_fatal() {
        let broken: Result<Config> = Err(anyhow!("Failed to parse TOML from file: x"));
        let err = settle_config(broken, false).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "Failed to load DirTree configuration: Failed to parse TOML from file: x"
        );
    }

    #[test]
    fn test_resolve_prefers_argument() -> Result<()> {
        let cfg = Config {
            tree: TreeConfig {
                default_root: Some("/from/config".into()),
                ..Default::default()
            },
        };
        let (root, options) = resolve(args(Some("/from/arg"), false), &cfg)?;
        assert_eq!(root, PathBuf::from("/from/arg"));
        assert!(options.follow_symlinks);
        Ok(())
    }

    #[test]
    fn test_resolve_falls_back_to_config_root() -> Result<()> {
        let cfg = Config {
            tree: TreeConfig {
                default_root: Some("/from/config".into()),
                ..Default::default()
            },
        };
        let (root, _) = resolve(args(None, false), &cfg)?;
        assert_eq!(root, PathBuf::from("/from/config"));
        Ok(())
    }

    #[test]
    fn test_resolve_without_root_fails() {
        let err = resolve(args(None, false), &Config::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DirtreeError>(),
            Some(DirtreeError::Config(_))
        ));
        assert!(err.to_string().contains("No directory given"));
    }

    #[test]
    fn test_follow_symlinks_flag_and_config() -> Result<()> {
        let cfg = Config::default();
        let (_, options) = resolve(args(Some("."), true), &cfg)?;
        assert!(!options.follow_symlinks);

        let cfg = Config {
            tree: TreeConfig {
                follow_symlinks: Some(false),
                ..Default::default()
            },
        };
        let (_, options) = resolve(args(Some("."), false), &cfg)?;
        assert!(!options.follow_symlinks);
        Ok(())
    }
}
