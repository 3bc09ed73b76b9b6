//! Cascade command - rebase stacked branches in dependency order

use crate::cli::CliProgress;
use crate::cli::style::{CHECK, Stylize, arrow, check, cross, spinner_style};
use anstream::println;
use dialoguer::Confirm;
use gh_taki::cascade::{CascadePlan, execute_cascade, plan_forest, plan_tree};
use gh_taki::error::{Error, Result};
use gh_taki::git::{GitCli, WorkingTree};
use gh_taki::github::list_open_prs;
use gh_taki::stack::{build_forest, find_tree_containing};
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;

/// Options for the cascade command
#[derive(Debug, Clone, Copy, Default)]
pub struct CascadeOptions {
    /// Cascade every stack, not just the one containing the current branch
    pub all: bool,
    /// Dry run - show what would be done without making changes
    pub dry_run: bool,
    /// Preview plan and prompt for confirmation before executing
    pub confirm: bool,
    /// Announce each step before it runs
    pub verbose: bool,
}

/// Run the cascade command
pub async fn run_cascade(path: &Path, options: CascadeOptions) -> Result<()> {
    let git = GitCli::discover(path)?;

    // Remember where the user started so a fully successful run can return
    // there. After a failure the checkout is left where the walk stopped.
    let original_branch = git.current_branch().await?;

    // Fetch open PRs with spinner
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message("Fetching pull requests...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let prs = list_open_prs(git.workdir()).await?;
    spinner.finish_with_message(format!(
        "{} Fetched {} open PR{}",
        check(),
        prs.len(),
        if prs.len() == 1 { "" } else { "s" }
    ));

    let forest = build_forest(&prs);

    if forest.is_empty() {
        println!("{}", "No open PRs found".muted());
        return Ok(());
    }

    // Scope the plan to one stack or the whole forest
    let plan = if options.all {
        plan_forest(&forest)
    } else {
        match find_tree_containing(&forest, &original_branch) {
            Some(root) => plan_tree(root),
            None => {
                println!(
                    "{} {} has no open PR or is not part of a PR stack",
                    cross(),
                    original_branch.warning()
                );
                println!();
                println!(
                    "{}",
                    "Hint: switch to a branch with an open PR, or pass --all".muted()
                );
                return Ok(());
            }
        }
    };

    // Show confirmation if requested
    if options.confirm && !options.dry_run {
        print_cascade_preview(&plan);
        if !Confirm::new()
            .with_prompt("Proceed with cascade?")
            .default(true)
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))?
        {
            println!("{}", "Aborted".muted());
            return Ok(());
        }
        println!();
    }

    // Execute
    let progress = if options.verbose {
        CliProgress::verbose()
    } else {
        CliProgress::compact()
    };
    let report = execute_cascade(&plan, &git, &progress, options.dry_run).await?;

    if options.dry_run {
        println!();
        println!("{}", "Dry run complete".muted());
        return Ok(());
    }

    match report.failure {
        None => {
            git.checkout(&original_branch).await?;

            println!();
            println!(
                "{} {} branch{} rebased and pushed",
                format!("{CHECK} Cascade complete:").success(),
                report.pushed.len().accent(),
                if report.pushed.len() == 1 { "" } else { "es" }
            );
            println!("{}", format!("Returned to '{original_branch}'").muted());
            Ok(())
        }
        Some(error) => {
            println!();
            if !report.pushed.is_empty() {
                println!(
                    "{}",
                    format!(
                        "Rebased and pushed before the failure: {}",
                        report.pushed.join(", ")
                    )
                    .muted()
                );
            }
            if error.leaves_tree_dirty() {
                println!(
                    "{}",
                    "Resolve the conflicts and run 'git rebase --continue',".muted()
                );
                println!(
                    "{}",
                    "then re-run 'taki cascade' to finish the remaining branches.".muted()
                );
            }
            Err(error)
        }
    }
}

/// Print cascade preview for --confirm
fn print_cascade_preview(plan: &CascadePlan) {
    println!("{}:", "Cascade plan".emphasis());
    println!();
    for step in &plan.steps {
        println!("  {} {}", arrow(), step);
    }
    println!();
}
