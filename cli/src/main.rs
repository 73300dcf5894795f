//! # DirTree Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point for the `dirtree` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up logging on stderr based on verbosity flags
//! - Running the tree command and mapping failures to exit code 1
//!
//! ## Examples
//!
//! ```bash
//! # Print the tree of the current directory
//! dirtree .
//!
//! # Print with debug logging on stderr
//! dirtree -vv ~/projects
//! ```
//!
//! Processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Run `commands::tree::handle_tree`
//! 4. Report any error on stderr and exit non-zero
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // The tree command and its printer
mod common; // Shared filesystem helpers
mod core; // Errors and configuration

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "dirtree",
    about = "Print a directory's contents as a tree",
    long_about = "Print a directory's contents recursively as a tree, using box-drawing\n\
                  connectors to show hierarchy. Entries are sorted by name.",
    version
)]
struct Cli {
    #[command(flatten)]
    tree: commands::tree::TreeArgs,
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::tree::handle_tree(cli.tree) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e); // Include the cause chain
        std::process::exit(1);
    }

    Ok(())
}
