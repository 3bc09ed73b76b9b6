//! Test data factories for gh-taki types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use gh_taki::types::PullRequest;

/// Create an open pull request with default values
pub fn make_pr(number: u64, head: &str, base: &str) -> PullRequest {
    PullRequest {
        number,
        title: format!("PR for {head}"),
        url: format!("https://github.com/test/repo/pull/{number}"),
        head_branch: head.to_string(),
        base_branch: base.to_string(),
        state: "OPEN".to_string(),
        is_draft: false,
        mergeable: "MERGEABLE".to_string(),
        review_decision: String::new(),
    }
}

/// Create a draft pull request
pub fn make_pr_draft(number: u64, head: &str, base: &str) -> PullRequest {
    PullRequest {
        is_draft: true,
        ..make_pr(number, head, base)
    }
}

/// Create a pull request whose head conflicts with its base
pub fn make_pr_conflicting(number: u64, head: &str, base: &str) -> PullRequest {
    PullRequest {
        mergeable: "CONFLICTING".to_string(),
        ..make_pr(number, head, base)
    }
}

/// Create an approved pull request
pub fn make_pr_approved(number: u64, head: &str, base: &str) -> PullRequest {
    PullRequest {
        review_decision: "APPROVED".to_string(),
        ..make_pr(number, head, base)
    }
}

/// Build a linear stack of PRs on top of `main`
///
/// `names[0]` is based on main, `names[1]` on `names[0]`, and so on. PR
/// numbers count up from 1 in stack order.
pub fn make_linear_stack(names: &[&str]) -> Vec<PullRequest> {
    make_stack_on("main", 1, names)
}

/// Build a linear stack on an arbitrary base branch
///
/// PR numbers count up from `first_number`, so stacks on different bases can
/// coexist in one collection without number collisions.
pub fn make_stack_on(base: &str, first_number: u64, names: &[&str]) -> Vec<PullRequest> {
    let mut prs = Vec::with_capacity(names.len());
    let mut parent = base.to_string();
    for (offset, name) in names.iter().enumerate() {
        prs.push(make_pr(first_number + offset as u64, name, &parent));
        parent = (*name).to_string();
    }
    prs
}
