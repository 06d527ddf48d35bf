//! Dependency manager bootstrap.

use tempfile::TempDir;

use crate::error::Result;
use crate::fetch::{
    artifact_path, fetch_and_verify, install_artifact, run_payload, HashAlgorithm, InstallMethod,
    PayloadSource, Verification, VerifiedPayload,
};
use crate::runner::RunContext;
use crate::ui::UserInterface;

use super::{with_spinner, Finish, InstallStep, StepOutcome};

/// Installs the dependency manager unless it is already on PATH or in
/// its install directory.
///
/// The installer payload is downloaded into a scratch directory, checked
/// against its published checksum, run through the runtime, and the
/// artifact it produces is copied into the install directory.
pub struct DependencyManagerStep;

impl InstallStep for DependencyManagerStep {
    fn name(&self) -> &str {
        "dependency-manager"
    }

    fn title(&self, ctx: &RunContext<'_>) -> String {
        format!("Installing {}", ctx.config.dependency_manager.name)
    }

    fn run(&self, ctx: &RunContext<'_>, ui: &mut dyn UserInterface) -> Result<StepOutcome> {
        let manager = &ctx.config.dependency_manager;

        if let Some(existing) = ctx.installed_dependency_manager() {
            tracing::debug!("{} found at {}", manager.name, existing.display());
            let reason = format!("{} already installed, skipping", manager.name);
            ui.success(&reason);
            return Ok(StepOutcome::skipped(reason));
        }

        let scratch = TempDir::new()?;
        let source = PayloadSource {
            payload_url: &manager.installer_url,
            checksum_url: &manager.checksum_url,
            algorithm: HashAlgorithm::from_name(&manager.hash_algorithm),
        };

        if ui.output_mode().shows_command_output() {
            ui.message(&format!("Downloading {}", manager.installer_url));
        }
        let payload = with_spinner(
            ui,
            &format!("Downloading {} installer", manager.name),
            |payload: &VerifiedPayload| match payload.verification() {
                Verification::Verified { .. } => Finish::Success("Installer verified".to_string()),
                Verification::Skipped { .. } => {
                    Finish::Skipped("Installer downloaded without verification".to_string())
                }
            },
            || fetch_and_verify(&ctx.fetcher, &source, scratch.path()),
        )?;

        if let Verification::Skipped { reason } = payload.verification() {
            ui.warning(reason);
        }

        let runtime = &ctx.config.runtime.command;
        with_spinner(
            ui,
            &format!("Running {} installer", manager.name),
            |_| Finish::Success(format!("{} built", manager.artifact)),
            || {
                run_payload(
                    payload,
                    ctx.runner,
                    runtime,
                    &manager.installer_args,
                    scratch.path(),
                )
            },
        )?;

        let destination = manager.install_path();
        let method = install_artifact(
            &artifact_path(scratch.path(), &manager.artifact),
            &destination,
            ctx.runner,
        )?;
        if method == InstallMethod::Elevated {
            tracing::debug!("Installed {} with sudo", destination.display());
        }

        ui.success(&format!(
            "{} installed to {}",
            manager.name,
            destination.display()
        ));
        Ok(StepOutcome::Completed)
    }
}
