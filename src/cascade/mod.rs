//! Cascade rebasing
//!
//! Replays a stack (or the whole forest) against the working tree in
//! dependency order: refresh the terminal base, then checkout, rebase onto
//! the parent, and force-with-lease push each branch, parents strictly
//! before children, aborting on the first failure.

mod execute;
mod plan;

pub use execute::{CascadeReport, execute_cascade, format_step_for_dry_run};
pub use plan::{CascadePlan, CascadeStep, plan_forest, plan_tree};

use crate::error::Error;
use async_trait::async_trait;

/// Progress events emitted while a cascade runs
///
/// Advisory only: implementations render user feedback and must never gate
/// the executor's forward progress.
#[async_trait]
pub trait CascadeProgress: Send + Sync {
    /// A step is about to run.
    async fn on_step_started(&self, step: &CascadeStep);

    /// A step finished successfully.
    async fn on_step_completed(&self, step: &CascadeStep);

    /// An informational message outside the step lifecycle.
    async fn on_message(&self, message: &str);

    /// A step failed; the walk is about to abort.
    async fn on_error(&self, error: &Error);
}

/// Progress sink that swallows every event, for tests and quiet callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

#[async_trait]
impl CascadeProgress for SilentProgress {
    async fn on_step_started(&self, _step: &CascadeStep) {}

    async fn on_step_completed(&self, _step: &CascadeStep) {}

    async fn on_message(&self, _message: &str) {}

    async fn on_error(&self, _error: &Error) {}
}
