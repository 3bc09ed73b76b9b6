//! Branch command - create a new stacked branch

use crate::cli::style::{Stylize, check};
use anstream::println;
use gh_taki::error::{Error, Result};
use gh_taki::git::{GitCli, WorkingTree};
use gh_taki::tracking::{BranchRecord, load_registry, save_registry};
use regex::Regex;
use std::path::Path;

/// Run the branch command
///
/// Creates `name` on top of the currently checked-out branch and records
/// the parentage so the relationship is known before a PR exists.
pub async fn run_branch(path: &Path, name: &str) -> Result<()> {
    if !is_valid_branch_name(name) {
        return Err(Error::InvalidBranchName(name.to_string()));
    }

    let git = GitCli::discover(path)?;
    let parent = git.current_branch().await?;

    println!(
        "Creating branch '{}' from '{}'...",
        name.accent(),
        parent.accent()
    );

    git.create_branch(name).await?;

    let mut registry = load_registry(git.git_dir())?;
    registry.record(BranchRecord::new(name.to_string(), parent.clone()));
    save_registry(git.git_dir(), &registry)?;

    println!(
        "{} Created and switched to branch '{}'",
        check(),
        name.accent()
    );

    Ok(())
}

/// Validate a branch name before touching any git state.
///
/// Stricter than git's own ref rules on purpose: names are limited to
/// alphanumerics plus `.`, `_`, `/`, `-`, starting with an alphanumeric.
fn is_valid_branch_name(name: &str) -> bool {
    if name.is_empty() || name.contains("..") || name.ends_with('/') || name.ends_with(".lock") {
        return false;
    }
    let pattern =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._/-]*$").expect("branch name pattern is valid");
    pattern.is_match(name)
}
