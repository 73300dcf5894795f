//! # DirTree CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and uses `dirtree_cmd()` to run the compiled binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get DirTree Command (`dirtree_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `dirtree` binary.
///
/// The command is isolated from the developer's environment: `DIRTREE_ROOT`
/// and `RUST_LOG` are removed, and `HOME` / `XDG_CONFIG_HOME` point into
/// `sandbox` so no user configuration file is picked up. The working
/// directory is `sandbox` as well, and a `.git` directory is created there so
/// the project config search never leaves it. Keep `sandbox` separate from
/// the tree being printed.
///
/// ## Panics
/// Panics if the `dirtree` binary cannot be found via `Command::cargo_bin`.
pub fn dirtree_cmd(sandbox: &Path) -> Command {
    std::fs::create_dir_all(sandbox.join(".git")).expect("Failed to create sandbox .git");
    let mut cmd = Command::cargo_bin("dirtree").expect("Failed to find dirtree binary for testing");
    cmd.current_dir(sandbox)
        .env_remove("DIRTREE_ROOT")
        .env_remove("RUST_LOG")
        .env("HOME", sandbox)
        .env("XDG_CONFIG_HOME", sandbox.join(".config"));
    cmd
}

/// Name printed on the header line for `root`.
pub fn header(root: &Path) -> String {
    root.file_name()
        .expect("temp dirs have a final component")
        .to_string_lossy()
        .into_owned()
}
