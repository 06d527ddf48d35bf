//! The full bootstrap: every step, then the closing instructions.

use std::path::PathBuf;

use crate::error::Result;
use crate::packages::PackageEnsurer;
use crate::steps::default_steps;
use crate::ui::{follow_up_instructions, UserInterface, LOGO};

use super::{Orchestrator, RunContext, RunReport};

/// Run the standard step sequence and print the follow-up instructions.
///
/// Instructions are only shown when every step succeeded.
pub fn run_bootstrap(ctx: &RunContext<'_>, ui: &mut dyn UserInterface) -> Result<RunReport> {
    let orchestrator = Orchestrator::new(default_steps(&ctx.config)?);
    tracing::debug!("Steps: {}", orchestrator.step_names().join(", "));

    let report = orchestrator.run(ctx, ui)?;

    let hint = path_hint(ctx);
    ui.show_banner(LOGO);
    for line in follow_up_instructions(&ctx.config.containers, &ctx.os, hint.as_deref()) {
        ui.message(&line);
    }

    Ok(report)
}

/// The global binary directory, if it is missing from PATH.
fn path_hint(ctx: &RunContext<'_>) -> Option<PathBuf> {
    let ensurer = PackageEnsurer::new(
        ctx.dependency_manager_program(),
        &ctx.config.dependency_manager,
        ctx.runner,
    );
    let dir = ensurer.global_bin_dir()?;
    if ctx.probe.searches(&dir) {
        None
    } else {
        Some(dir)
    }
}
