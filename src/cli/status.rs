//! Default status command - print the dependency forest of open PRs

use crate::cli::style::{self, Stylize, spinner_style};
use anstream::{print, println};
use gh_taki::error::Result;
use gh_taki::git::{GitCli, WorkingTree};
use gh_taki::github::list_open_prs;
use gh_taki::stack::{build_forest, find_tree_containing};
use gh_taki::tracking::load_registry;
use gh_taki::types::{Forest, PullRequest, TreeNode};
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;

/// Run the status command (default when no subcommand given)
///
/// Fetches open PRs, builds the dependency forest, and prints it grouped by
/// base branch with per-PR status icons.
pub async fn run_status(path: &Path) -> Result<()> {
    let git = GitCli::discover(path)?;
    let current_branch = git.current_branch().await?;

    // Fetch open PRs with spinner
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message("Fetching pull requests...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let prs = list_open_prs(git.workdir()).await?;
    spinner.finish_and_clear();

    let forest = build_forest(&prs);

    if forest.is_empty() {
        println!("{}", "No open PRs found".muted());
        println!();
        println!(
            "{}",
            "Open a pull request with 'gh pr create' to start a stack.".muted()
        );
        return Ok(());
    }

    print!("{}", render_forest(&forest, &current_branch));

    // Summary
    let total = forest.size();
    let stacks = forest.roots.len();
    println!();
    println!(
        "{} open PR{} in {} stack{}",
        total.accent(),
        if total == 1 { "" } else { "s" },
        stacks.accent(),
        if stacks == 1 { "" } else { "s" }
    );

    println!();
    println!(
        "{}",
        format!(
            "Legend: {} = draft, {} = conflicts, {} = approved, {} = changes requested, {} = awaiting review",
            style::DRAFT,
            style::CONFLICT,
            style::CHECK,
            style::CROSS,
            style::BULLET
        )
        .muted()
    );

    // Note a locally recorded branch whose PR has not been opened yet
    let registry = load_registry(git.git_dir()).unwrap_or_default();
    if find_tree_containing(&forest, &current_branch).is_none() {
        if let Some(parent) = registry.parent_of(&current_branch) {
            println!();
            println!(
                "{}",
                format!("(branch '{current_branch}' is stacked on '{parent}' but has no open PR yet)")
                    .muted()
            );
        }
    }

    println!();
    println!(
        "To rebase a stack onto its base: {}",
        "taki cascade".accent()
    );

    Ok(())
}

/// Render the forest grouped by base branch.
///
/// Consecutive roots sharing a base get one bold header; groups are
/// separated by a blank line. Every line ends with a newline.
pub fn render_forest(forest: &Forest, current_branch: &str) -> String {
    let mut out = String::new();
    let roots = &forest.roots;
    let mut i = 0;

    while i < roots.len() {
        let base = &roots[i].pr.base_branch;
        let group_end = roots[i..]
            .iter()
            .position(|r| &r.pr.base_branch != base)
            .map_or(roots.len(), |offset| i + offset);

        if i > 0 {
            out.push('\n');
        }
        out.push_str(&base.emphasis());
        out.push('\n');

        let group = &roots[i..group_end];
        for (idx, root) in group.iter().enumerate() {
            render_node(root, current_branch, "", idx == group.len() - 1, &mut out);
        }

        i = group_end;
    }

    out
}

/// Render one node and its subtree with box-drawing connectors.
fn render_node(
    node: &TreeNode,
    current_branch: &str,
    prefix: &str,
    is_last: bool,
    out: &mut String,
) {
    let connector = if is_last { "└── " } else { "├── " };
    out.push_str(prefix);
    out.push_str(connector);
    out.push_str(&format_pr_line(&node.pr, current_branch));
    out.push('\n');

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    for (idx, child) in node.children.iter().enumerate() {
        render_node(
            child,
            current_branch,
            &child_prefix,
            idx == node.children.len() - 1,
            out,
        );
    }
}

/// One line for one PR: icon, branch, number, truncated title.
fn format_pr_line(pr: &PullRequest, current_branch: &str) -> String {
    let icon = style::status_icon(pr);
    let number = style::pr_number(pr).muted();
    let title = style::truncate_title(&pr.title);

    let branch = if pr.head_branch == current_branch {
        format!("{} ← current", pr.head_branch).warning()
    } else {
        pr.head_branch.accent()
    };

    format!("{icon} {branch} {number} {title}")
}
