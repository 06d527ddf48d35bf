//! Takeout installer - bootstrap a PHP development environment.
//!
//! The installer checks that PHP is present and new enough, installs
//! Composer from a checksum-verified installer, ensures Takeout and the
//! Laravel installer are globally available, and finally points the user
//! at the Docker install guide for their operating system.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`environment`] - Operating system detection
//! - [`error`] - Error types, result alias and exit codes
//! - [`fetch`] - Integrity-checked downloads and artifact installation
//! - [`packages`] - Global package presence and installation
//! - [`requirements`] - Tool lookup and version gating
//! - [`runner`] - Run context and ordered step execution
//! - [`shell`] - External command execution
//! - [`steps`] - The individual installation steps
//! - [`ui`] - Terminal output, spinners and the closing banner
//!
//! # Example
//!
//! ```
//! use takeout_installer::requirements::{is_acceptable, Version};
//!
//! let found: Version = "7.10.0".parse().unwrap();
//! let minimum: Version = "7.9.0".parse().unwrap();
//! assert!(is_acceptable(&found, &minimum));
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod fetch;
pub mod packages;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{InstallerError, Result};
