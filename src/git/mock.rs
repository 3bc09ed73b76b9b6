//! In-memory working tree for tests
//!
//! Records every call in order and fails on demand, so cascade behavior can
//! be exercised without a real repository or network.

use crate::error::{Error, Result};
use crate::git::WorkingTree;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

/// Scriptable [`WorkingTree`] double
///
/// Every operation appends one line to the call log (`"checkout feat-1"`,
/// `"rebase feat-1 onto main"`, `"push feat-1"`). Failures are injected per
/// branch and reported with the same error variants the real git surface
/// produces.
#[derive(Debug, Default)]
pub struct MockWorkingTree {
    calls: Mutex<Vec<String>>,
    current: Mutex<String>,
    conflicting_rebases: Mutex<HashSet<String>>,
    rejected_pushes: Mutex<HashSet<String>>,
    failing_pulls: Mutex<HashSet<String>>,
}

impl MockWorkingTree {
    /// Create a mock with `main` checked out.
    pub fn new() -> Self {
        Self::with_current("main")
    }

    /// Create a mock reporting `branch` as the checked-out branch.
    pub fn with_current(branch: &str) -> Self {
        let mock = Self::default();
        *mock.current.lock().expect("mock lock") = branch.to_string();
        mock
    }

    /// Make rebasing `branch` stop on a conflict.
    pub fn set_rebase_conflict(&self, branch: &str) {
        self.conflicting_rebases
            .lock()
            .expect("mock lock")
            .insert(branch.to_string());
    }

    /// Make pushing `branch` fail with a lease rejection.
    pub fn set_push_rejected(&self, branch: &str) {
        self.rejected_pushes
            .lock()
            .expect("mock lock")
            .insert(branch.to_string());
    }

    /// Make pulling `branch` fail.
    pub fn set_pull_failure(&self, branch: &str) {
        self.failing_pulls
            .lock()
            .expect("mock lock")
            .insert(branch.to_string());
    }

    /// Snapshot of the call log, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock lock").clone()
    }

    /// Whether the exact call line was recorded.
    pub fn was_called(&self, call: &str) -> bool {
        self.calls
            .lock()
            .expect("mock lock")
            .iter()
            .any(|recorded| recorded == call)
    }

    /// Whether no recorded call mentions `branch` at all.
    pub fn never_touched(&self, branch: &str) -> bool {
        !self
            .calls
            .lock()
            .expect("mock lock")
            .iter()
            .any(|call| call.split_whitespace().any(|word| word == branch))
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("mock lock").push(call);
    }
}

#[async_trait]
impl WorkingTree for MockWorkingTree {
    async fn current_branch(&self) -> Result<String> {
        Ok(self.current.lock().expect("mock lock").clone())
    }

    async fn checkout(&self, branch: &str) -> Result<()> {
        self.record(format!("checkout {branch}"));
        *self.current.lock().expect("mock lock") = branch.to_string();
        Ok(())
    }

    async fn checkout_and_pull(&self, branch: &str) -> Result<()> {
        self.checkout(branch).await?;
        self.record(format!("pull {branch}"));
        if self.failing_pulls.lock().expect("mock lock").contains(branch) {
            return Err(Error::Git(format!(
                "failed to pull latest changes for '{branch}': no upstream"
            )));
        }
        Ok(())
    }

    async fn rebase_onto(&self, branch: &str, onto: &str) -> Result<()> {
        self.record(format!("rebase {branch} onto {onto}"));
        if self
            .conflicting_rebases
            .lock()
            .expect("mock lock")
            .contains(branch)
        {
            return Err(Error::RebaseConflict {
                branch: branch.to_string(),
                onto: onto.to_string(),
            });
        }
        Ok(())
    }

    async fn push_force_with_lease(&self, branch: &str) -> Result<()> {
        self.record(format!("push {branch}"));
        if self.rejected_pushes.lock().expect("mock lock").contains(branch) {
            return Err(Error::PushRejected {
                branch: branch.to_string(),
                details: "stale info, remote moved".to_string(),
            });
        }
        Ok(())
    }
}
