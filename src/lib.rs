//! gh-taki - Stacked pull requests for GitHub
//!
//! This library provides the core functionality for working with stacked pull
//! requests: rebuilding the dependency forest of a repository's open PRs from
//! their head/base branch names, and cascade-rebasing a stack in dependency
//! order against a live working tree.
//!
//! # Architecture
//!
//! The flow is: fetch open PRs (via the `gh` CLI) -> build the dependency
//! forest -> locate the stack containing the current branch -> plan the
//! cascade -> execute it against the git working tree. Construction is pure
//! and deterministic; only the executor mutates repository state, strictly
//! sequentially, aborting on the first failure.
//!
//! All I/O is async and state is passed explicitly (no globals).

pub mod cascade;
pub mod error;
pub mod git;
pub mod github;
pub mod stack;
pub mod tracking;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
