//! Temporary git repository for testing

#![allow(dead_code)] // not every test binary drives a real repository

use gh_taki::git::GitCli;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Temporary git repository wired to a local bare origin
///
/// Creates a working clone whose `origin` remote is a bare repository in a
/// sibling temporary directory, so pushes and pulls work without touching
/// the network. Uses the git CLI for setup to stay close to real usage.
/// Automatically cleaned up when dropped.
pub struct TempGitRepo {
    origin: TempDir,
    work: TempDir,
}

impl TempGitRepo {
    /// Create a repo with one commit on `main`, pushed to origin
    pub fn new() -> Self {
        let origin = TempDir::new().expect("failed to create temp directory for origin");
        let work = TempDir::new().expect("failed to create temp directory for work tree");

        let output = Command::new("git")
            .args(["init", "--bare", "--initial-branch=main"])
            .current_dir(origin.path())
            .output()
            .expect("git binary not found - is git installed and in PATH?");

        assert!(
            output.status.success(),
            "git init --bare failed at {}: {}",
            origin.path().display(),
            String::from_utf8_lossy(&output.stderr)
        );

        let repo = Self { origin, work };
        repo.run_git(&["init", "--initial-branch=main"]);
        repo.run_git(&["config", "user.name", "Test Author"]);
        repo.run_git(&["config", "user.email", "test@example.com"]);
        repo.run_git(&["config", "commit.gpgsign", "false"]);

        let origin_url = repo.origin.path().display().to_string();
        repo.run_git(&["remote", "add", "origin", &origin_url]);

        repo.commit_file("README.md", "seed\n", "Initial commit");
        repo.run_git(&["push", "-u", "origin", "main"]);
        repo
    }

    /// Get the working tree root path
    pub fn path(&self) -> &Path {
        self.work.path()
    }

    /// Open as [`GitCli`] for use with gh-taki
    pub fn git_cli(&self) -> GitCli {
        GitCli::discover(self.work.path()).unwrap_or_else(|e| {
            panic!(
                "failed to open repository at {}: {e}",
                self.work.path().display()
            )
        })
    }

    /// Run a git command with arguments, returning stdout on success
    pub fn run_git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.work.path())
            .output()
            .expect("failed to run git command");

        assert!(
            output.status.success(),
            "git {} failed at {}: {}",
            args.join(" "),
            self.work.path().display(),
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Write a file and commit it on the current branch
    pub fn commit_file(&self, name: &str, content: &str, message: &str) {
        std::fs::write(self.work.path().join(name), content)
            .unwrap_or_else(|e| panic!("failed to write test file {name}: {e}"));
        self.run_git(&["add", name]);
        self.run_git(&["commit", "-m", message]);
    }

    /// Create a branch off the current checkout and switch to it
    pub fn create_branch(&self, name: &str) {
        self.run_git(&["checkout", "-b", name]);
    }

    /// Switch to an existing branch
    pub fn checkout(&self, name: &str) {
        self.run_git(&["checkout", name]);
    }

    /// Push a branch to origin, setting its upstream
    pub fn push_branch(&self, name: &str) {
        self.run_git(&["push", "-u", "origin", name]);
    }

    /// Branch currently checked out
    pub fn current_branch(&self) -> String {
        self.run_git(&["rev-parse", "--abbrev-ref", "HEAD"])
            .trim()
            .to_string()
    }

    /// Commit id a revision resolves to
    pub fn rev_of(&self, rev: &str) -> String {
        self.run_git(&["rev-parse", rev]).trim().to_string()
    }

    /// Whether `ancestor` is reachable from `descendant`
    pub fn is_ancestor(&self, ancestor: &str, descendant: &str) -> bool {
        Command::new("git")
            .args(["merge-base", "--is-ancestor", ancestor, descendant])
            .current_dir(self.work.path())
            .status()
            .expect("failed to run git merge-base")
            .success()
    }

    /// Build a linear stack of branches, each with one commit, pushed
    ///
    /// Each tuple is (`branch_name`, `commit_message`). Branches are created
    /// in order, each on top of the previous; the last one is left checked
    /// out.
    pub fn build_stack(&self, branches: &[(&str, &str)]) {
        for (branch, message) in branches {
            self.create_branch(branch);
            self.commit_file(&format!("{branch}.txt"), message, message);
            self.push_branch(branch);
        }
    }
}

impl Default for TempGitRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_repo() {
        let repo = TempGitRepo::new();
        assert!(repo.path().exists());
        assert!(repo.path().join(".git").exists());
        assert_eq!(repo.current_branch(), "main");
    }

    #[test]
    fn test_build_stack() {
        let repo = TempGitRepo::new();
        repo.build_stack(&[("feat-a", "Add A"), ("feat-b", "Add B")]);

        assert_eq!(repo.current_branch(), "feat-b");
        // Both branches exist locally and on origin, chained off main.
        assert_eq!(repo.rev_of("feat-a"), repo.rev_of("origin/feat-a"));
        assert_eq!(repo.rev_of("feat-b"), repo.rev_of("origin/feat-b"));
        assert!(repo.is_ancestor("main", "feat-a"));
        assert!(repo.is_ancestor("feat-a", "feat-b"));
    }

    #[test]
    fn test_open_as_git_cli() {
        let repo = TempGitRepo::new();
        let git = repo.git_cli();
        assert!(git.git_dir().ends_with(".git"));
    }
}
