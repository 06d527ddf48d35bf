//! Runtime presence and minimum-version gate.
//!
//! The base runtime is never installed automatically: when it is missing
//! or too old, the run stops and tells the user what to install.

use crate::config::RuntimeConfig;
use crate::error::{InstallerError, Result};
use crate::requirements::probe::ToolProbe;
use crate::requirements::version::{current_version, is_acceptable, Version};
use crate::shell::CommandRunner;

/// Check that the configured runtime is installed and new enough.
///
/// Returns the detected version on success.
///
/// # Errors
///
/// - `MissingPrerequisite` when the runtime is not on PATH
/// - `VersionTooLow` when it is older than the configured minimum
/// - `VersionUnreadable` / `CommandFailed` when its version cannot be read
pub fn verify_runtime(
    runtime: &RuntimeConfig,
    probe: &ToolProbe,
    runner: &dyn CommandRunner,
) -> Result<Version> {
    if !probe.tool_exists(&runtime.command) {
        return Err(InstallerError::MissingPrerequisite {
            tool: runtime.name.clone(),
            hint: runtime.install_hint.clone(),
        });
    }

    let minimum: Version =
        runtime
            .minimum_version
            .parse()
            .map_err(|message| InstallerError::ConfigValidationError {
                message: format!("runtime.minimum_version: {}", message),
            })?;

    let found = current_version(runner, &runtime.command, &runtime.version_args)?;

    if !is_acceptable(&found, &minimum) {
        return Err(InstallerError::VersionTooLow {
            tool: runtime.name.clone(),
            required: minimum.to_string(),
            found: found.to_string(),
        });
    }

    Ok(found)
}
