//! Cascade execution
//!
//! Runs a planned cascade against the working tree, strictly sequentially.
//! Every step mutates the single shared checkout, so steps never overlap and
//! the first failure stops the walk with all later steps untouched. Nothing
//! is rolled back: a conflicted rebase is deliberately left in place for the
//! user to resolve.

use crate::cascade::{CascadePlan, CascadeProgress, CascadeStep};
use crate::error::{Error, Result};
use crate::git::WorkingTree;
use tracing::debug;

// ============================================================================
// Types
// ============================================================================

/// What a cascade run actually did
#[derive(Debug, Default)]
pub struct CascadeReport {
    /// Branches rebased and pushed, in completion order
    pub pushed: Vec<String>,
    /// Base branches refreshed
    pub updated_bases: Vec<String>,
    /// The error that stopped the walk, if any
    pub failure: Option<Error>,
}

impl CascadeReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the whole plan ran to completion.
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Record the error that aborted the walk.
    fn fail(&mut self, error: Error) {
        self.failure = Some(error);
    }
}

// ============================================================================
// Execution
// ============================================================================

/// Execute a cascade plan against the working tree.
///
/// Steps run in plan order. On the first failure the error is reported, the
/// walk stops immediately without attempting or cleaning up anything else,
/// and the failure is recorded in the report; the `Err` path is reserved for
/// the executor itself breaking, not for step failures. With `dry_run` the
/// schedule is announced and the repository is never touched.
pub async fn execute_cascade(
    plan: &CascadePlan,
    tree: &dyn WorkingTree,
    progress: &dyn CascadeProgress,
    dry_run: bool,
) -> Result<CascadeReport> {
    let mut report = CascadeReport::new();

    if dry_run {
        progress
            .on_message("Dry run - no changes will be made")
            .await;
        report_dry_run(plan, progress).await;
        return Ok(report);
    }

    for step in &plan.steps {
        progress.on_step_started(step).await;

        match run_step(step, tree).await {
            Ok(()) => {
                match step {
                    CascadeStep::UpdateBase { branch } => {
                        report.updated_bases.push(branch.clone());
                    }
                    CascadeStep::Rebase { branch, .. } => {
                        report.pushed.push(branch.clone());
                    }
                }
                progress.on_step_completed(step).await;
            }
            Err(error) => {
                progress.on_error(&error).await;
                report.fail(error);
                return Ok(report);
            }
        }
    }

    debug!(
        "Cascade complete: {} branches pushed, {} bases updated",
        report.pushed.len(),
        report.updated_bases.len()
    );
    Ok(report)
}

/// Run a single step against the working tree.
async fn run_step(step: &CascadeStep, tree: &dyn WorkingTree) -> Result<()> {
    match step {
        CascadeStep::UpdateBase { branch } => {
            debug!("Updating base branch {branch}");
            tree.checkout_and_pull(branch).await
        }
        CascadeStep::Rebase { branch, onto } => {
            debug!("Cascading {branch} onto {onto}");
            tree.checkout(branch).await?;
            tree.rebase_onto(branch, onto).await?;
            tree.push_force_with_lease(branch).await
        }
    }
}

/// Report what would be done in a dry run
async fn report_dry_run(plan: &CascadePlan, progress: &dyn CascadeProgress) {
    if plan.is_empty() {
        progress.on_message("Nothing to do - no open PRs in scope").await;
        return;
    }

    progress.on_message("Would execute:").await;
    for step in &plan.steps {
        progress.on_message(&format_step_for_dry_run(step)).await;
    }
}

/// Format a step for dry run output
pub fn format_step_for_dry_run(step: &CascadeStep) -> String {
    format!("  → {step}")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::{SilentProgress, plan_tree};
    use crate::git::MockWorkingTree;
    use crate::types::{PullRequest, TreeNode};

    fn make_pr(number: u64, head: &str, base: &str) -> PullRequest {
        PullRequest {
            number,
            title: format!("PR #{number}"),
            url: String::new(),
            head_branch: head.to_string(),
            base_branch: base.to_string(),
            state: "OPEN".to_string(),
            is_draft: false,
            mergeable: String::new(),
            review_decision: String::new(),
        }
    }

    fn make_chain() -> TreeNode {
        let mut root = TreeNode::leaf(make_pr(1, "feat-1", "main"));
        let mut mid = TreeNode::leaf(make_pr(2, "feat-2", "feat-1"));
        mid.children.push(TreeNode::leaf(make_pr(3, "feat-3", "feat-2")));
        root.children.push(mid);
        root
    }

    #[tokio::test]
    async fn test_full_chain_runs_in_order() {
        let plan = plan_tree(&make_chain());
        let tree = MockWorkingTree::new();

        let report = execute_cascade(&plan, &tree, &SilentProgress, false)
            .await
            .unwrap();

        assert!(report.is_success());
        assert_eq!(report.pushed, vec!["feat-1", "feat-2", "feat-3"]);
        assert_eq!(report.updated_bases, vec!["main"]);
        assert_eq!(
            tree.calls(),
            vec![
                "checkout main",
                "pull main",
                "checkout feat-1",
                "rebase feat-1 onto main",
                "push feat-1",
                "checkout feat-2",
                "rebase feat-2 onto feat-1",
                "push feat-2",
                "checkout feat-3",
                "rebase feat-3 onto feat-2",
                "push feat-3",
            ]
        );
    }

    #[tokio::test]
    async fn test_conflict_stops_walk_and_leaves_descendants_untouched() {
        let plan = plan_tree(&make_chain());
        let tree = MockWorkingTree::new();
        tree.set_rebase_conflict("feat-2");

        let report = execute_cascade(&plan, &tree, &SilentProgress, false)
            .await
            .unwrap();

        assert!(!report.is_success());
        assert_eq!(report.pushed, vec!["feat-1"]);
        assert!(matches!(
            report.failure,
            Some(Error::RebaseConflict { ref branch, ref onto })
                if branch == "feat-2" && onto == "feat-1"
        ));
        // The conflicted branch was checked out but never pushed, and the
        // walk never reached its child.
        assert!(tree.was_called("checkout feat-2"));
        assert!(!tree.was_called("push feat-2"));
        assert!(tree.never_touched("feat-3"));
    }

    #[tokio::test]
    async fn test_push_rejection_stops_walk() {
        let plan = plan_tree(&make_chain());
        let tree = MockWorkingTree::new();
        tree.set_push_rejected("feat-1");

        let report = execute_cascade(&plan, &tree, &SilentProgress, false)
            .await
            .unwrap();

        assert!(!report.is_success());
        assert!(report.pushed.is_empty());
        assert!(matches!(report.failure, Some(Error::PushRejected { .. })));
        assert!(tree.never_touched("feat-2"));
    }

    #[tokio::test]
    async fn test_base_pull_failure_stops_walk_before_any_rebase() {
        let plan = plan_tree(&make_chain());
        let tree = MockWorkingTree::new();
        tree.set_pull_failure("main");

        let report = execute_cascade(&plan, &tree, &SilentProgress, false)
            .await
            .unwrap();

        assert!(!report.is_success());
        assert!(report.pushed.is_empty());
        assert!(report.updated_bases.is_empty());
        assert!(tree.never_touched("feat-1"));
    }

    #[tokio::test]
    async fn test_dry_run_touches_nothing() {
        let plan = plan_tree(&make_chain());
        let tree = MockWorkingTree::new();

        let report = execute_cascade(&plan, &tree, &SilentProgress, true)
            .await
            .unwrap();

        assert!(report.is_success());
        assert!(report.pushed.is_empty());
        assert!(tree.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_plan_succeeds() {
        let plan = CascadePlan::default();
        let tree = MockWorkingTree::new();

        let report = execute_cascade(&plan, &tree, &SilentProgress, false)
            .await
            .unwrap();

        assert!(report.is_success());
        assert!(report.pushed.is_empty());
        assert!(tree.calls().is_empty());
    }
}
