//! PR directory
//!
//! In-memory index over one fetch of open PRs: head-branch lookup plus a
//! precomputed base-branch adjacency, so forest construction stays near O(n)
//! instead of rescanning the whole collection at every node.

use crate::types::PullRequest;
use std::collections::HashMap;

/// Lookup index over a flat collection of open PRs
///
/// Borrows the input; nothing is cloned until nodes are built. A branch has
/// at most one open PR, so duplicate head branches should not occur; if they
/// do, the later entry wins everywhere (lookup and adjacency alike).
#[derive(Debug)]
pub struct PrDirectory<'a> {
    by_head: HashMap<&'a str, &'a PullRequest>,
    children: HashMap<&'a str, Vec<&'a PullRequest>>,
}

impl<'a> PrDirectory<'a> {
    /// Index a collection of PRs by head branch and by base branch.
    pub fn new(prs: &'a [PullRequest]) -> Self {
        let mut by_head: HashMap<&str, &PullRequest> = HashMap::with_capacity(prs.len());
        for pr in prs {
            by_head.insert(pr.head_branch.as_str(), pr);
        }

        // Adjacency built from the deduplicated map, not the raw input, so a
        // duplicated head cannot appear as two children.
        let mut children: HashMap<&str, Vec<&PullRequest>> = HashMap::new();
        for &pr in by_head.values() {
            children.entry(pr.base_branch.as_str()).or_default().push(pr);
        }

        // Candidate children in PR-number order, fixed once so every
        // traversal sees the same order.
        for list in children.values_mut() {
            list.sort_by_key(|pr| pr.number);
        }

        Self { by_head, children }
    }

    /// The PR whose head is `branch`, if any.
    pub fn by_head(&self, branch: &str) -> Option<&'a PullRequest> {
        self.by_head.get(branch).copied()
    }

    /// Whether some open PR publishes `branch` as its head.
    pub fn has_head(&self, branch: &str) -> bool {
        self.by_head.contains_key(branch)
    }

    /// PRs based on `branch`, sorted by PR number ascending.
    pub fn children_of(&self, branch: &str) -> &[&'a PullRequest] {
        self.children.get(branch).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct head branches indexed.
    pub fn len(&self) -> usize {
        self.by_head.len()
    }

    /// Whether the directory indexes no PRs at all.
    pub fn is_empty(&self) -> bool {
        self.by_head.is_empty()
    }
}
