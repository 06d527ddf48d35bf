//! Installation steps.
//!
//! Each step checks before it acts, so running the whole sequence again on
//! a provisioned machine only produces skips:
//!
//! - [`RuntimeStep`] - Require the base runtime at a minimum version
//! - [`DependencyManagerStep`] - Download, verify and install the dependency manager
//! - [`PackageStep`] - Ensure one global package is present

pub mod dependency_manager;
pub mod package;
pub mod runtime;

pub use dependency_manager::DependencyManagerStep;
pub use package::PackageStep;
pub use runtime::RuntimeStep;

use crate::config::BootstrapConfig;
use crate::error::Result;
use crate::packages::PackageId;
use crate::runner::RunContext;
use crate::ui::UserInterface;

/// What a step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step changed or verified the machine.
    Completed,
    /// Nothing needed doing.
    Skipped { reason: String },
}

impl StepOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// A named unit of installation work.
///
/// Any `Err` halts the whole run.
pub trait InstallStep {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;

    /// Heading shown above the step's output.
    fn title(&self, ctx: &RunContext<'_>) -> String;

    /// Do the work.
    fn run(&self, ctx: &RunContext<'_>, ui: &mut dyn UserInterface) -> Result<StepOutcome>;
}

/// The standard sequence: runtime, dependency manager, then each package.
pub fn default_steps(config: &BootstrapConfig) -> Result<Vec<Box<dyn InstallStep>>> {
    let mut steps: Vec<Box<dyn InstallStep>> =
        vec![Box::new(RuntimeStep), Box::new(DependencyManagerStep)];
    for id in &config.packages {
        steps.push(Box::new(PackageStep::new(PackageId::new(id.as_str())?)));
    }
    Ok(steps)
}

/// How a spinner should finish after successful work.
pub(crate) enum Finish {
    Success(String),
    Skipped(String),
}

/// Run `work` under a spinner, finishing it with `done` or the error.
pub(crate) fn with_spinner<T>(
    ui: &mut dyn UserInterface,
    message: &str,
    done: impl FnOnce(&T) -> Finish,
    work: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let mut spinner = ui.start_spinner(message);
    match work() {
        Ok(value) => {
            match done(&value) {
                Finish::Success(msg) => spinner.finish_success(&msg),
                Finish::Skipped(msg) => spinner.finish_skipped(&msg),
            }
            Ok(value)
        }
        Err(e) => {
            spinner.finish_error(message);
            Err(e)
        }
    }
}
