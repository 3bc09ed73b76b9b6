//! GitHub CLI surface
//!
//! All GitHub data comes through the user's authenticated `gh` binary, so
//! the tool inherits their login and host configuration and never handles
//! tokens itself.

use crate::error::{Error, Result};
use crate::types::PullRequest;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// JSON fields requested from `gh pr list`
const PR_LIST_FIELDS: &str =
    "number,title,url,headRefName,baseRefName,state,isDraft,mergeable,reviewDecision";

/// List the caller's open pull requests in the repository at `path`.
///
/// Runs `gh pr list` scoped to open PRs authored by the logged-in user. The
/// returned order is whatever `gh` reports; the forest builder imposes its
/// own ordering on top.
pub async fn list_open_prs(path: &Path) -> Result<Vec<PullRequest>> {
    debug!("Listing open PRs via gh in {}", path.display());
    let output = Command::new("gh")
        .args([
            "pr",
            "list",
            "--json",
            PR_LIST_FIELDS,
            "--state",
            "open",
            "--author",
            "@me",
        ])
        .current_dir(path)
        .output()
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Gh(
                    "gh executable not found in PATH; install the GitHub CLI and run 'gh auth login'"
                        .to_string(),
                )
            } else {
                Error::Io(e)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Gh(stderr.trim().to_string()));
    }

    let prs: Vec<PullRequest> = serde_json::from_slice(&output.stdout)?;
    debug!("gh reported {} open pull requests", prs.len());
    Ok(prs)
}
