//! Terminal styling helpers
//!
//! Colors are applied only when stdout supports them, so captured output
//! (tests, pipes) stays plain text. Keep all color decisions here; command
//! code should only pick which role a piece of text plays.

use gh_taki::types::PullRequest;
use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream};
use std::io::IsTerminal;
use terminal_link::Link;

/// Check mark for completed steps and approved PRs
pub const CHECK: &str = "✓";
/// Cross for failures and requested changes
pub const CROSS: &str = "✗";
/// Bullet for open PRs awaiting review
pub const BULLET: &str = "●";
/// Open circle for draft PRs
pub const DRAFT: &str = "○";
/// Marker for PRs with merge conflicts
pub const CONFLICT: &str = "!";

/// Longest PR title rendered before truncation
pub const MAX_TITLE_LENGTH: usize = 50;

/// Role-based styling for terminal output
///
/// Implemented for anything displayable so numbers and strings read the
/// same at call sites.
pub trait Stylize: std::fmt::Display + Sized {
    /// Bold, for headers.
    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.bold())
            .to_string()
    }

    /// Dimmed, for secondary text.
    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.dimmed())
            .to_string()
    }

    /// Cyan, for identifiers like branch names and counts.
    fn accent(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.cyan())
            .to_string()
    }

    /// Green, for success.
    fn success(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.green())
            .to_string()
    }

    /// Red, for errors.
    fn error(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.red())
            .to_string()
    }

    /// Yellow, for warnings and attention markers.
    fn warning(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string()
    }
}

impl<T: std::fmt::Display> Stylize for T {}

/// Green check mark.
pub fn check() -> String {
    CHECK.success()
}

/// Red cross.
pub fn cross() -> String {
    CROSS.error()
}

/// Arrow for plan steps.
pub fn arrow() -> String {
    "→".accent()
}

/// Spinner style shared by all long-running fetches.
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}").expect("spinner template is valid")
}

/// Status icon for a PR, one glyph wide.
///
/// Draft wins over everything else, then merge conflicts, then the review
/// decision.
pub fn status_icon(pr: &PullRequest) -> String {
    if pr.is_draft {
        return DRAFT.muted();
    }
    if pr.mergeable == "CONFLICTING" {
        return CONFLICT.warning();
    }
    match pr.review_decision.as_str() {
        "APPROVED" => CHECK.success(),
        "CHANGES_REQUESTED" => CROSS.error(),
        _ => BULLET.accent(),
    }
}

/// Truncate a PR title to the display limit, char-safe for UTF-8.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_LENGTH {
        format!(
            "{}...",
            title
                .chars()
                .take(MAX_TITLE_LENGTH - 3)
                .collect::<String>()
        )
    } else {
        title.to_string()
    }
}

/// The PR number as `#N`, hyperlinked to the PR when the terminal supports
/// it.
pub fn pr_number(pr: &PullRequest) -> String {
    let label = format!("#{}", pr.number);
    if !pr.url.is_empty()
        && std::io::stdout().is_terminal()
        && supports_hyperlinks::supports_hyperlinks()
    {
        Link::new(&label, &pr.url).to_string()
    } else {
        label
    }
}
