//! Git working tree operations
//!
//! The cascade executor talks to the repository through the [`WorkingTree`]
//! trait. [`GitCli`] is the real implementation: repository discovery and
//! HEAD inspection go through gix, while the mutating operations shell out
//! to the `git` binary so rebase machinery, hooks, and credential helpers
//! behave exactly as they do for the user.

mod mock;

pub use mock::MockWorkingTree;

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Output;
use tokio::process::Command;
use tracing::debug;

/// The mutating git surface a cascade runs against
///
/// One implementation per backing store: [`GitCli`] for a real repository,
/// [`MockWorkingTree`] for tests. All operations act on the single shared
/// checkout, so callers must sequence them.
#[async_trait]
pub trait WorkingTree: Send + Sync {
    /// Name of the branch HEAD points at.
    async fn current_branch(&self) -> Result<String>;

    /// Switch the working tree to `branch`.
    async fn checkout(&self, branch: &str) -> Result<()>;

    /// Switch to `branch` and pull its upstream.
    async fn checkout_and_pull(&self, branch: &str) -> Result<()>;

    /// Rebase `branch`, which must be checked out, onto `onto`.
    ///
    /// A conflicted rebase fails with [`Error::RebaseConflict`] and leaves
    /// the working tree mid-rebase for manual resolution.
    async fn rebase_onto(&self, branch: &str, onto: &str) -> Result<()>;

    /// Force-push the checked-out `branch` with `--force-with-lease`.
    async fn push_force_with_lease(&self, branch: &str) -> Result<()>;
}

/// Working tree backed by the system `git` binary
pub struct GitCli {
    workdir: PathBuf,
    git_dir: PathBuf,
}

impl GitCli {
    /// Discover the repository containing `path` and bind to its working
    /// tree.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = gix::discover(path).map_err(|e| {
            debug!("Repository discovery failed at {}: {e}", path.display());
            Error::NotARepository
        })?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| Error::Git("bare repository has no working tree".to_string()))?
            .to_path_buf();
        let git_dir = repo.git_dir().to_path_buf();
        Ok(Self { workdir, git_dir })
    }

    /// Root of the working tree.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// The repository's `.git` directory.
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// Create `name` at HEAD and switch to it.
    pub async fn create_branch(&self, name: &str) -> Result<()> {
        let output = self.run_git(&["checkout", "-b", name]).await?;
        if output.status.success() {
            return Ok(());
        }
        let details = failure_details(&output);
        if details.contains("already exists") {
            return Err(Error::BranchExists(name.to_string()));
        }
        Err(Error::Git(format!(
            "failed to create branch '{name}': {details}"
        )))
    }

    /// Read the branch name HEAD points at via gix.
    fn head_branch(&self) -> Result<String> {
        let repo = gix::open(&self.git_dir)
            .map_err(|e| Error::Git(format!("failed to open repository: {e}")))?;
        let head = repo
            .head_name()
            .map_err(|e| Error::Git(format!("failed to read HEAD: {e}")))?;
        let name = head.ok_or(Error::DetachedHead)?;
        Ok(name.shorten().to_string())
    }

    /// Run a git subcommand in the working tree, capturing output.
    async fn run_git(&self, args: &[&str]) -> Result<Output> {
        debug!("Running git {}", args.join(" "));
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::Git("git executable not found in PATH".to_string())
                } else {
                    Error::Io(e)
                }
            })?;
        Ok(output)
    }
}

#[async_trait]
impl WorkingTree for GitCli {
    async fn current_branch(&self) -> Result<String> {
        self.head_branch()
    }

    async fn checkout(&self, branch: &str) -> Result<()> {
        let output = self.run_git(&["checkout", branch]).await?;
        if output.status.success() {
            return Ok(());
        }
        Err(Error::Checkout {
            branch: branch.to_string(),
            details: failure_details(&output),
        })
    }

    async fn checkout_and_pull(&self, branch: &str) -> Result<()> {
        self.checkout(branch).await?;
        let output = self.run_git(&["pull"]).await?;
        if output.status.success() {
            return Ok(());
        }
        Err(Error::Git(format!(
            "failed to pull latest changes for '{branch}': {}",
            failure_details(&output)
        )))
    }

    async fn rebase_onto(&self, branch: &str, onto: &str) -> Result<()> {
        let output = self.run_git(&["rebase", onto]).await?;
        if output.status.success() {
            return Ok(());
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if is_rebase_conflict(&stdout, &stderr) {
            return Err(Error::RebaseConflict {
                branch: branch.to_string(),
                onto: onto.to_string(),
            });
        }
        Err(Error::Git(format!(
            "failed to rebase '{branch}' onto '{onto}': {}",
            failure_details(&output)
        )))
    }

    async fn push_force_with_lease(&self, branch: &str) -> Result<()> {
        let output = self.run_git(&["push", "--force-with-lease"]).await?;
        if output.status.success() {
            return Ok(());
        }
        Err(Error::PushRejected {
            branch: branch.to_string(),
            details: failure_details(&output),
        })
    }
}

/// Whether failed rebase output indicates conflicts rather than some other
/// breakage (dirty tree, unknown ref).
fn is_rebase_conflict(stdout: &str, stderr: &str) -> bool {
    stdout.contains("CONFLICT")
        || stdout.contains("could not apply")
        || stderr.contains("CONFLICT")
        || stderr.contains("could not apply")
        || stderr.contains("unmerged")
}

/// Best human-readable account of a failed git invocation.
fn failure_details(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let trimmed = stderr.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let trimmed = stdout.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    format!("git exited with {}", output.status)
}
