//! Cascade planning
//!
//! Flattens a dependency tree (or the whole forest) into the ordered list
//! of steps a cascade will execute. The schedule is the pre-order walk of
//! each tree: a branch is rebased and pushed before any of its children,
//! children in stored order. Building the plan up front keeps dry runs and
//! confirmation previews complete without touching the repository.

use crate::types::{Forest, TreeNode};
use tracing::debug;

// ============================================================================
// Types
// ============================================================================

/// One scheduled git operation in a cascade
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeStep {
    /// Refresh a stack's terminal base branch before anything is rebased
    /// onto it.
    UpdateBase {
        /// Base branch to checkout and pull
        branch: String,
    },

    /// Checkout `branch`, rebase it onto `onto`, then force-push it.
    Rebase {
        /// Branch being replayed
        branch: String,
        /// Its base: the already-stabilized parent tip
        onto: String,
    },
}

impl CascadeStep {
    /// Branch this step operates on.
    pub fn branch(&self) -> &str {
        match self {
            Self::UpdateBase { branch } | Self::Rebase { branch, .. } => branch,
        }
    }
}

impl std::fmt::Display for CascadeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpdateBase { branch } => write!(f, "update {branch}"),
            Self::Rebase { branch, onto } => {
                write!(f, "rebase {branch} onto {onto}, then push")
            }
        }
    }
}

/// Ordered cascade schedule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadePlan {
    /// Steps in execution order
    pub steps: Vec<CascadeStep>,
}

impl CascadePlan {
    /// Whether there is nothing to execute.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of branches that will be rebased and pushed.
    pub fn rebase_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, CascadeStep::Rebase { .. }))
            .count()
    }

    /// Number of base branches that will be refreshed.
    pub fn base_update_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, CascadeStep::UpdateBase { .. }))
            .count()
    }
}

// ============================================================================
// Planning
// ============================================================================

/// Plan the cascade for a single tree.
///
/// The schedule refreshes the tree's base branch, then rebases every branch
/// in the tree parent-first.
pub fn plan_tree(root: &TreeNode) -> CascadePlan {
    let mut plan = CascadePlan::default();
    plan.steps.push(CascadeStep::UpdateBase {
        branch: root.pr.base_branch.clone(),
    });
    push_subtree(root, &mut plan);

    debug!(
        "Planned cascade of {} branches under {}",
        plan.rebase_count(),
        root.pr.base_branch
    );
    plan
}

/// Plan the cascade for every tree in the forest, in forest order.
///
/// Consecutive roots sharing a base branch share a single refresh of it, so
/// a forest grouped by base pulls each base once.
pub fn plan_forest(forest: &Forest) -> CascadePlan {
    let mut plan = CascadePlan::default();
    let mut last_base: Option<&str> = None;

    for root in &forest.roots {
        if last_base != Some(root.pr.base_branch.as_str()) {
            plan.steps.push(CascadeStep::UpdateBase {
                branch: root.pr.base_branch.clone(),
            });
            last_base = Some(root.pr.base_branch.as_str());
        }
        push_subtree(root, &mut plan);
    }

    debug!(
        "Planned forest cascade: {} rebases, {} base updates",
        plan.rebase_count(),
        plan.base_update_count()
    );
    plan
}

/// Emit this node's rebase step, then its children's, pre-order.
fn push_subtree(node: &TreeNode, plan: &mut CascadePlan) {
    plan.steps.push(CascadeStep::Rebase {
        branch: node.pr.head_branch.clone(),
        onto: node.pr.base_branch.clone(),
    });
    for child in &node.children {
        push_subtree(child, plan);
    }
}

// ============================================================================
// Tests
// ============================================================================
