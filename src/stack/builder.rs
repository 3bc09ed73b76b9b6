//! Dependency forest builder
//!
//! Rebuilds the stack structure of a repository's open PRs purely from their
//! head/base branch names: a single root-detection pass followed by
//! depth-first growth, guarded by a visited set.

use crate::stack::PrDirectory;
use crate::types::{Forest, PullRequest, TreeNode};
use std::collections::HashSet;
use tracing::debug;

/// Build the dependency forest for a flat collection of open PRs
///
/// A PR is a root iff its base branch is not the head of any other PR in the
/// input: its parent is an external branch, typically the repository's
/// default branch. Children are the PRs based on a node's head branch,
/// ordered by PR number ascending. Roots come out grouped by base branch,
/// groups ordered lexicographically by that base branch name, insertion
/// order preserved within a group.
///
/// Cycles cannot occur in a healthy repository but are tolerated: a branch
/// is marked visited before its children are explored, so traversal always
/// terminates. A cycle with no external entry point contributes no nodes at
/// all (with single-base edges, every cycle is such a disconnected loop).
///
/// Root candidacy is decided in one pass over the input: a PR skipped as a
/// root candidate because its base matched some head is never re-promoted,
/// even if that parent turns out to be unreachable. Deliberate, to keep the
/// output deterministic.
pub fn build_forest(prs: &[PullRequest]) -> Forest {
    if prs.is_empty() {
        debug!("No open PRs, nothing to build");
        return Forest::default();
    }

    debug!("Building dependency forest from {} open PRs", prs.len());

    let directory = PrDirectory::new(prs);
    let mut visited: HashSet<String> = HashSet::with_capacity(prs.len());
    let mut roots = Vec::new();

    for pr in prs {
        if visited.contains(pr.head_branch.as_str()) {
            continue;
        }
        // Root iff the base branch has no open PR of its own.
        if !directory.has_head(&pr.base_branch) {
            roots.push(grow_subtree(pr, &directory, &mut visited));
        }
    }

    // Group roots by their terminal base branch. sort_by is stable, so
    // insertion order survives within each group.
    roots.sort_by(|a, b| a.pr.base_branch.cmp(&b.pr.base_branch));

    debug!(
        "Built forest: {} roots covering {} of {} PRs",
        roots.len(),
        roots.iter().map(TreeNode::size).sum::<usize>(),
        prs.len()
    );

    Forest { roots }
}

/// Grow the subtree rooted at `pr`, marking each branch visited before
/// descending so a revisit is impossible.
fn grow_subtree(
    pr: &PullRequest,
    directory: &PrDirectory<'_>,
    visited: &mut HashSet<String>,
) -> TreeNode {
    visited.insert(pr.head_branch.clone());

    let mut node = TreeNode::leaf(pr.clone());
    for &child in directory.children_of(&pr.head_branch) {
        if visited.contains(child.head_branch.as_str()) {
            continue;
        }
        node.children.push(grow_subtree(child, directory, visited));
    }
    node
}
