//! Base runtime check.

use crate::error::Result;
use crate::requirements::verify_runtime;
use crate::runner::RunContext;
use crate::ui::UserInterface;

use super::{InstallStep, StepOutcome};

/// Requires the runtime to be installed at the configured minimum version.
///
/// Never installs anything.
pub struct RuntimeStep;

impl InstallStep for RuntimeStep {
    fn name(&self) -> &str {
        "runtime"
    }

    fn title(&self, ctx: &RunContext<'_>) -> String {
        format!("Checking {}", ctx.config.runtime.name)
    }

    fn run(&self, ctx: &RunContext<'_>, ui: &mut dyn UserInterface) -> Result<StepOutcome> {
        let runtime = &ctx.config.runtime;
        let version = verify_runtime(runtime, &ctx.probe, ctx.runner)?;
        ui.success(&format!(
            "{} {} found (minimum {})",
            runtime.name, version, runtime.minimum_version
        ));
        Ok(StepOutcome::Completed)
    }
}
