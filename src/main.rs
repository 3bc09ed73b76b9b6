//! taki - Stacked PRs for the GitHub CLI
//!
//! CLI binary for inspecting and cascading stacked pull requests.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "taki")]
#[command(about = "Stacked pull requests on top of gh")]
#[command(version)]
struct Cli {
    /// Path to git repository (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebase every branch of the current stack onto its parent, then push
    Cascade {
        /// Cascade every stack, not just the one containing the current branch
        #[arg(long, short)]
        all: bool,

        /// Dry run - show what would be done without making changes
        #[arg(long)]
        dry_run: bool,

        /// Preview the plan and prompt for confirmation before executing
        #[arg(long, short = 'c')]
        confirm: bool,

        /// Announce each step before it runs
        #[arg(long, short)]
        verbose: bool,
    },

    /// Create a new stacked branch on top of the current one
    Branch {
        /// Name for the new branch
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        None => {
            // Default: show the dependency forest
            cli::run_status(&path).await?;
        }
        Some(Commands::Cascade {
            all,
            dry_run,
            confirm,
            verbose,
        }) => {
            cli::run_cascade(
                &path,
                cli::CascadeOptions {
                    all,
                    dry_run,
                    confirm,
                    verbose,
                },
            )
            .await?;
        }
        Some(Commands::Branch { name }) => {
            cli::run_branch(&path, &name).await?;
        }
    }

    Ok(())
}
