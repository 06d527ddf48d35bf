//! Operating system detection.
//!
//! The detected OS is only used for display: it picks which container
//! runtime install guide the final instructions point at.

use std::fmt;

use crate::shell::{CommandOptions, CommandRunner};

/// Operating system family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatingSystem {
    Linux,
    MacOs,
    /// Anything else, carrying the raw identification string.
    Unknown(String),
}

impl OperatingSystem {
    /// Map a kernel name (`uname -s` output) to an OS family.
    ///
    /// Never fails: unrecognized names become [`OperatingSystem::Unknown`].
    pub fn from_kernel_name(raw: &str) -> Self {
        match raw.trim() {
            "Linux" => OperatingSystem::Linux,
            "Darwin" => OperatingSystem::MacOs,
            other => OperatingSystem::Unknown(other.to_string()),
        }
    }

    /// Map Rust's compile-time target OS name.
    fn from_target(target: &str) -> Self {
        match target {
            "linux" => OperatingSystem::Linux,
            "macos" => OperatingSystem::MacOs,
            other => OperatingSystem::Unknown(other.to_string()),
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        match self {
            OperatingSystem::Linux => "Linux",
            OperatingSystem::MacOs => "macOS",
            OperatingSystem::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the OS by asking the kernel for its name.
///
/// Falls back to the compile-time target when `uname` is unavailable.
pub fn detect_os(runner: &dyn CommandRunner) -> OperatingSystem {
    match runner.run("uname", &["-s".to_string()], &CommandOptions::captured()) {
        Ok(result) if result.success && !result.stdout.trim().is_empty() => {
            let os = OperatingSystem::from_kernel_name(&result.stdout);
            tracing::debug!("Detected OS {:?} from uname", os);
            os
        }
        _ => {
            let os = OperatingSystem::from_target(std::env::consts::OS);
            tracing::debug!("uname unavailable, assuming {:?}", os);
            os
        }
    }
}
