//! Step execution orchestration.

pub mod bootstrap;
pub mod context;
pub mod orchestrator;

pub use bootstrap::run_bootstrap;
pub use context::RunContext;
pub use orchestrator::{Orchestrator, RunReport, StepRecord};
