//! # DirTree Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional TOML configuration that supplies defaults
//! for the `dirtree` command. Command-line arguments always take precedence
//! over anything found here.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.dirtree.toml` in the current directory or ancestors
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/dirtree/config.toml` on Linux)
//! 3. Default values defined in the code
//!
//! Each file is validated and its paths expanded as it is loaded: `~` becomes
//! the home directory, and a relative `default_root` is resolved against the
//! directory containing the file that set it (not the current directory).
//! If the current directory cannot be determined, the project file search is
//! skipped with a warning.
//!
//! ## Examples
//!
//! ```toml
//! [tree]
//! follow_symlinks = false
//! default_root = "~/projects"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let follow = cfg.tree.follow_symlinks();
//! ```
//!
use crate::core::error::{DirtreeError, Result}; // Error kinds and anyhow Result
use anyhow::{anyhow, Context}; // Error construction and context
use directories::ProjectDirs; // Platform-specific user config directory
use serde::Deserialize; // TOML deserialization of the config structs
use std::{
    fs,                    // Reading config files
    path::{Path, PathBuf}, // Config file locations and root paths
};
use tracing::{debug, info, warn}; // Logging of which sources were used

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,
}

/// Settings for tree printing. Unset fields fall through to the next source.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TreeConfig {
    /// Descend into symlinked directories (defaults to true).
    #[serde(default)]
    pub follow_symlinks: Option<bool>,
    /// Root directory used when no PATH argument is given (can use ~).
    #[serde(default)]
    pub default_root: Option<String>,
}

impl TreeConfig {
    pub fn follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(true)
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".dirtree.toml";

/// # Load Configuration (`load_config`)
///
/// Loads the user and project configuration files (if present) and merges
/// them, project values taking precedence.
///
/// ## Returns
///
/// * `Result<Config>` - The merged configuration; `Config::default()` when no
///   file exists.
/// * `Err` - If a configuration file exists but cannot be read, parsed, or
///   fails validation.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = match std::env::current_dir() {
        Ok(current_dir) => load_project_config(&current_dir)?,
        Err(e) => {
            // A deleted working directory must not block printing an explicit path.
            warn!(
                "Could not determine current directory: {}. Skipping project configuration.",
                e
            );
            None
        }
    };
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "DirTree", "dirtree") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.dirtree.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.dirtree.toml`.
/// The search stops at the first directory holding a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

/// Reads, parses, validates and expands one configuration file.
fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    validate_config(&config)
        .with_context(|| format!("Configuration validation failed for {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    expand_config_paths(&mut config, base_dir);
    Ok(config)
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project_cfg) = project else {
        return user;
    };
    Config {
        tree: TreeConfig {
            follow_symlinks: project_cfg
                .tree
                .follow_symlinks
                .or(user.tree.follow_symlinks),
            default_root: project_cfg.tree.default_root.or(user.tree.default_root),
        },
    }
}

/// Expands `~` in `default_root` and anchors a relative result at `base_dir`.
fn expand_config_paths(config: &mut Config, base_dir: &Path) {
    if let Some(root) = config.tree.default_root.as_mut() {
        let expanded = PathBuf::from(shellexpand::tilde(root.as_str()).into_owned());
        let anchored = if expanded.is_relative() {
            base_dir.join(expanded)
        } else {
            expanded
        };
        *root = anchored.to_string_lossy().into_owned();
        debug!("Expanded default root: {}", root);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(root) = &config.tree.default_root {
        if root.trim().is_empty() {
            return Err(anyhow!(DirtreeError::Config(
                "tree.default_root cannot be empty.".to_string()
            )));
        }
    }
    Ok(())
}
