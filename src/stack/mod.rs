//! Stack reconstruction
//!
//! Turns a flat list of open PRs into the dependency forest of stacked
//! branches, and locates the stack a given branch belongs to. Construction
//! is pure and deterministic; nothing here touches the repository.

mod builder;
mod directory;
mod locate;

pub use builder::build_forest;
pub use directory::PrDirectory;
pub use locate::find_tree_containing;
