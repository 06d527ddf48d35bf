//! Ordered step execution.

use std::time::{Duration, Instant};

use crate::error::Result;
use crate::steps::{InstallStep, StepOutcome};
use crate::ui::UserInterface;

use super::RunContext;

/// One finished step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub name: String,
    pub outcome: StepOutcome,
}

/// Result of a successful run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Every step, in execution order.
    pub steps: Vec<StepRecord>,
    /// Total duration.
    pub duration: Duration,
}

impl RunReport {
    /// Number of steps that changed or verified something.
    pub fn completed(&self) -> usize {
        self.steps.iter().filter(|s| !s.outcome.is_skipped()).count()
    }

    /// Number of steps that had nothing to do.
    pub fn skipped(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_skipped()).count()
    }

    /// One-line summary for the end of a run.
    pub fn summary(&self) -> String {
        format!(
            "{} steps: {} completed, {} skipped ({:.1}s)",
            self.steps.len(),
            self.completed(),
            self.skipped(),
            self.duration.as_secs_f64()
        )
    }
}

/// Runs install steps strictly in order, stopping at the first failure.
pub struct Orchestrator {
    steps: Vec<Box<dyn InstallStep>>,
}

impl Orchestrator {
    pub fn new(steps: Vec<Box<dyn InstallStep>>) -> Self {
        Self { steps }
    }

    /// Step names, in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step.
    ///
    /// The first step error is returned as-is; later steps never start.
    pub fn run(&self, ctx: &RunContext<'_>, ui: &mut dyn UserInterface) -> Result<RunReport> {
        let start = Instant::now();
        let total = self.steps.len();
        let mut report = RunReport::default();

        for (index, step) in self.steps.iter().enumerate() {
            let name = step.name();
            ui.show_step_title(&step.title(ctx));
            tracing::debug!("Running step {} ({}/{})", name, index + 1, total);

            let outcome = match step.run(ctx, ui) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("Step {} failed: {}", name, e);
                    return Err(e);
                }
            };

            if let StepOutcome::Skipped { reason } = &outcome {
                tracing::debug!("Step {} skipped: {}", name, reason);
            }
            report.steps.push(StepRecord {
                name: name.to_string(),
                outcome,
            });
        }

        report.duration = start.elapsed();
        Ok(report)
    }
}
