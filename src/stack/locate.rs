//! Branch locator
//!
//! Finds which tree of the forest, if any, contains a given branch. Callers
//! get the *root* back, not the matching node: a cascade needs the whole
//! stack, starting from its terminal base.

use crate::types::{Forest, TreeNode};

/// Find the root of the tree containing `branch`
///
/// `None` means the branch is not part of any open-PR stack. That is an
/// ordinary outcome (nothing to cascade), not an error.
pub fn find_tree_containing<'a>(forest: &'a Forest, branch: &str) -> Option<&'a TreeNode> {
    forest
        .roots
        .iter()
        .find(|root| subtree_contains(root, branch))
}

/// Depth-first membership test on head branch names.
fn subtree_contains(node: &TreeNode, branch: &str) -> bool {
    node.pr.head_branch == branch
        || node
            .children
            .iter()
            .any(|child| subtree_contains(child, branch))
}
