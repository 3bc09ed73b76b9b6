//! Shared support for gh-taki integration tests
//!
//! Each test binary pulls this in via `mod common;`; not every binary uses
//! every helper.

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod fixtures;
pub mod temp_repo;

pub use fixtures::*;
pub use temp_repo::TempGitRepo;

pub use gh_taki::git::MockWorkingTree;
