//! Global package step.

use crate::error::Result;
use crate::packages::{EnsureOutcome, PackageEnsurer, PackageId};
use crate::runner::RunContext;
use crate::ui::UserInterface;

use super::{with_spinner, Finish, InstallStep, StepOutcome};

/// Ensures one package is installed globally.
pub struct PackageStep {
    id: PackageId,
    name: String,
}

impl PackageStep {
    pub fn new(id: PackageId) -> Self {
        let name = format!("package:{}", id);
        Self { id, name }
    }

    pub fn id(&self) -> &PackageId {
        &self.id
    }
}

impl InstallStep for PackageStep {
    fn name(&self) -> &str {
        &self.name
    }

    fn title(&self, _ctx: &RunContext<'_>) -> String {
        format!("Installing {}", self.id)
    }

    fn run(&self, ctx: &RunContext<'_>, ui: &mut dyn UserInterface) -> Result<StepOutcome> {
        let program = ctx.dependency_manager_program();
        let ensurer = PackageEnsurer::new(program, &ctx.config.dependency_manager, ctx.runner);

        let id = &self.id;
        let outcome = with_spinner(
            ui,
            &format!("Installing {}", id),
            |outcome: &EnsureOutcome| match outcome {
                EnsureOutcome::AlreadyInstalled => {
                    Finish::Skipped(format!("{} already installed, skipping", id))
                }
                EnsureOutcome::Installed => Finish::Success(format!("{} installed", id)),
            },
            || ensurer.ensure(id),
        )?;

        match outcome {
            EnsureOutcome::AlreadyInstalled => Ok(StepOutcome::skipped(format!(
                "{} already installed, skipping",
                id
            ))),
            EnsureOutcome::Installed => Ok(StepOutcome::Completed),
        }
    }
}
