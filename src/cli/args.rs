//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Takeout installer - bootstrap a PHP environment with Composer, Takeout and the Laravel installer.
#[derive(Debug, Parser)]
#[command(name = "takeout-installer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides ~/.takeout-installer/config.yml)
    #[arg(short, long, env = "TAKEOUT_INSTALLER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Accepted for compatibility and ignored
    #[arg(hide = true)]
    pub args: Vec<String>,
}
