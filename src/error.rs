//! Error types for gh-taki
//!
//! Uses thiserror for structured errors. Cascade failures carry the branch
//! and operation involved so an operator can resume by hand from exactly
//! where the walk stopped.

use thiserror::Error;

/// Main error type for gh-taki operations
#[derive(Error, Debug)]
pub enum Error {
    /// The path is not inside a git repository
    #[error("not in a git repository (or any parent up to mount point)")]
    NotARepository,

    /// HEAD is not on a branch, so there is nothing to stack from
    #[error("not on a branch (detached HEAD)")]
    DetachedHead,

    /// Checking out a branch failed (missing branch, dirty working tree)
    #[error("failed to check out '{branch}': {details}")]
    Checkout {
        /// Branch that could not be checked out
        branch: String,
        /// Trailing stderr from git
        details: String,
    },

    /// A rebase stopped on conflicts; the working tree is left mid-rebase
    /// for manual resolution
    #[error("rebase of '{branch}' onto '{onto}' stopped on conflicts")]
    RebaseConflict {
        /// Branch being rebased
        branch: String,
        /// Rebase target
        onto: String,
    },

    /// The remote rejected a force-with-lease push (lease mismatch, auth,
    /// network)
    #[error("push of '{branch}' rejected: {details}")]
    PushRejected {
        /// Branch whose push was rejected
        branch: String,
        /// Trailing stderr from git
        details: String,
    },

    /// Git operation failed
    #[error("git operation failed: {0}")]
    Git(String),

    /// The `gh` CLI failed or is not installed
    #[error("gh error: {0}")]
    Gh(String),

    /// Branch name rejected before any git state was touched
    #[error("invalid branch name '{0}'")]
    InvalidBranchName(String),

    /// Branch already exists
    #[error("branch '{0}' already exists")]
    BranchExists(String),

    /// Tracking state error
    #[error("tracking error: {0}")]
    Tracking(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the working tree was left mid-operation and needs manual
    /// attention before the next cascade.
    pub fn leaves_tree_dirty(&self) -> bool {
        matches!(self, Self::RebaseConflict { .. })
    }
}

/// Result type alias for gh-taki operations
pub type Result<T> = std::result::Result<T, Error>;
