//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - The default (and only) command

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{install, load_effective_config, resolve_output_mode, run};
