//! Running a verified payload and installing what it produces.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{InstallerError, Result};
use crate::fetch::verify::VerifiedPayload;
use crate::shell::{display_command, is_elevated, CommandOptions, CommandRunner};

/// Execute a payload with `interpreter` inside `work_dir`.
///
/// The payload file is consumed and removed whether or not it succeeds.
pub fn run_payload(
    payload: VerifiedPayload,
    runner: &dyn CommandRunner,
    interpreter: &str,
    args: &[String],
    work_dir: &Path,
) -> Result<()> {
    let mut command_args = vec![payload.path().display().to_string()];
    command_args.extend(args.iter().cloned());

    let options = CommandOptions::captured().in_dir(work_dir);
    let result = runner.run(interpreter, &command_args, &options);

    if let Err(e) = payload.close() {
        tracing::warn!("Failed to remove installer payload: {}", e);
    }

    let result = result?;
    tracing::debug!("Installer exited after {:?}", result.duration);
    if !result.success {
        tracing::debug!("Installer stderr: {}", result.stderr.trim());
        return Err(InstallerError::CommandFailed {
            command: display_command(interpreter, &command_args),
            code: result.exit_code,
        });
    }
    Ok(())
}

/// How an artifact reached its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMethod {
    /// Copied directly by this process.
    Direct,
    /// Copied with `sudo install`.
    Elevated,
}

/// Place `artifact` at `destination` as an executable.
///
/// Falls back to `sudo install -m 0755` when the destination is not
/// writable and the process is not already running as root.
///
/// # Errors
///
/// - `ArtifactMissing` when the payload produced nothing at `artifact`
/// - `Io` when the copy fails for any reason other than permissions
/// - `CommandFailed` when the elevated copy fails
pub fn install_artifact(
    artifact: &Path,
    destination: &Path,
    runner: &dyn CommandRunner,
) -> Result<InstallMethod> {
    if !artifact.is_file() {
        return Err(InstallerError::ArtifactMissing {
            path: artifact.to_path_buf(),
        });
    }

    match copy_executable(artifact, destination) {
        Ok(()) => {
            tracing::debug!("Installed {}", destination.display());
            Ok(InstallMethod::Direct)
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied && !is_elevated() => {
            tracing::debug!(
                "{} is not writable, retrying with sudo",
                destination.display()
            );
            let args = vec![
                "install".to_string(),
                "-m".to_string(),
                "0755".to_string(),
                artifact.display().to_string(),
                destination.display().to_string(),
            ];
            runner.run_checked("sudo", &args, &CommandOptions::default())?;
            Ok(InstallMethod::Elevated)
        }
        Err(e) => Err(e.into()),
    }
}

fn copy_executable(from: &Path, to: &Path) -> io::Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(from, to)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(to, fs::Permissions::from_mode(0o755))?;
    }

    Ok(())
}

/// Path the payload is expected to produce inside `work_dir`.
pub fn artifact_path(work_dir: &Path, artifact: &str) -> PathBuf {
    work_dir.join(artifact)
}
