//! Terminal progress reporting for cascade runs

use crate::cli::style::{Stylize, check, cross};
use anstream::println;
use async_trait::async_trait;
use gh_taki::cascade::{CascadeProgress, CascadeStep};
use gh_taki::error::Error;

/// Prints cascade progress to the terminal
#[derive(Debug, Clone, Copy)]
pub struct CliProgress {
    verbose: bool,
}

impl CliProgress {
    /// One line per completed step.
    pub fn compact() -> Self {
        Self { verbose: false }
    }

    /// Announce each step before it runs as well.
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

#[async_trait]
impl CascadeProgress for CliProgress {
    async fn on_step_started(&self, step: &CascadeStep) {
        if self.verbose {
            println!("  {}", format!("{step}...").muted());
        }
    }

    async fn on_step_completed(&self, step: &CascadeStep) {
        match step {
            CascadeStep::UpdateBase { branch } => {
                println!("  {} updated {}", check(), branch.accent());
            }
            CascadeStep::Rebase { branch, onto } => {
                println!(
                    "  {} rebased {} onto {}",
                    check(),
                    branch.accent(),
                    onto.accent()
                );
            }
        }
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }

    async fn on_error(&self, error: &Error) {
        println!("  {} {error}", cross());
    }
}
