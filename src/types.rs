//! Core types for gh-taki

use serde::{Deserialize, Serialize};

/// An open pull request, as reported by `gh pr list --json`
///
/// Field names on the wire are the GitHub CLI's camelCase JSON keys. The
/// dependency structure is derived purely from `head_branch`/`base_branch`;
/// the status fields are consumed only for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Web URL for the PR
    #[serde(default)]
    pub url: String,
    /// Head branch name (the branch this PR publishes)
    #[serde(rename = "headRefName")]
    pub head_branch: String,
    /// Base branch name (the branch this PR targets)
    #[serde(rename = "baseRefName")]
    pub base_branch: String,
    /// PR state (e.g. "OPEN")
    #[serde(default)]
    pub state: String,
    /// Whether the PR is a draft
    #[serde(default)]
    pub is_draft: bool,
    /// Merge state (notably "CONFLICTING")
    #[serde(default)]
    pub mergeable: String,
    /// Review decision ("APPROVED", "CHANGES_REQUESTED", or empty)
    #[serde(default)]
    pub review_decision: String,
}

/// A node in the dependency forest: one open PR plus the PRs stacked on it
///
/// A child is a PR whose `base_branch` equals this node's `head_branch`.
/// Children are sorted by PR number ascending and are exclusively owned by
/// their parent; the structure is a forest of values, no back-pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// The PR this node represents
    pub pr: PullRequest,
    /// PRs based on this node's head branch, by PR number ascending
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a leaf node for a PR.
    pub fn leaf(pr: PullRequest) -> Self {
        Self {
            pr,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Self::size).sum::<usize>()
    }
}

/// The dependency forest of all open PRs
///
/// Roots are PRs whose base branch has no open PR of its own (it is external,
/// typically the repository's default branch). Root order is deterministic:
/// grouped by base branch, groups ordered lexicographically by that base
/// branch name, insertion order preserved within a group.
///
/// Rebuilt fresh from a live PR query on every invocation, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    /// Root nodes in deterministic order
    pub roots: Vec<TreeNode>,
}

impl Forest {
    /// Whether the forest contains no trees at all.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of PRs across all trees.
    pub fn size(&self) -> usize {
        self.roots.iter().map(TreeNode::size).sum()
    }
}
