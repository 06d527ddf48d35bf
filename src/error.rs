//! Error types for installer operations.
//!
//! This module defines [`InstallerError`], the error type returned by every
//! step, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every fatal condition is an `InstallerError` returned to the orchestrator
//! - The entry point maps the error to a process exit code via
//!   [`InstallerError::exit_code`]
//! - Messages are written for the person running the installer

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a fully successful run.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for any fatal step failure.
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for a payload whose checksum did not match.
pub const EXIT_INTEGRITY: u8 = 2;

/// Core error type for installer operations.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// A base tool must be installed by hand before the installer can continue.
    #[error("{tool} is not installed. {hint}")]
    MissingPrerequisite { tool: String, hint: String },

    /// The base tool is installed but older than the required minimum.
    #[error("{tool} {required} or newer is required, found {found}")]
    VersionTooLow {
        tool: String,
        required: String,
        found: String,
    },

    /// The tool's self-reported version could not be parsed.
    #[error("Could not read the {tool} version from: {output}")]
    VersionUnreadable { tool: String, output: String },

    /// A downloaded payload did not match its published checksum.
    #[error("Checksum mismatch for {url}: expected {expected}, got {actual}")]
    IntegrityMismatch {
        url: String,
        expected: String,
        actual: String,
    },

    /// A download could not be completed.
    #[error("Failed to download {url}: {message}")]
    DownloadFailed { url: String, message: String },

    /// An external command exited unsuccessfully or could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The payload ran but did not produce the expected file.
    #[error("Installer did not produce {path}")]
    ArtifactMissing { path: PathBuf },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InstallerError {
    /// Process exit code for this error.
    ///
    /// Integrity failures get their own code so wrappers can tell a
    /// tampered download apart from an ordinary failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            InstallerError::IntegrityMismatch { .. } => EXIT_INTEGRITY,
            _ => EXIT_FAILURE,
        }
    }
}

/// Result type alias for installer operations.
pub type Result<T> = std::result::Result<T, InstallerError>;
