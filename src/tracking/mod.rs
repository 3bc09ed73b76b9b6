//! Stacked branch bookkeeping
//!
//! Remembers which branch a stacked branch was created from, under the
//! repository's git directory. The dependency forest itself is always
//! rebuilt from open PRs; this registry only preserves parentage for
//! branches whose PR does not exist yet.

mod storage;

pub use storage::{load_registry, registry_path, save_registry};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current version of the registry file format.
pub const REGISTRY_VERSION: u32 = 1;

/// A stacked branch and the branch it was created from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BranchRecord {
    /// Branch name (e.g., "feat-auth").
    pub name: String,
    /// Branch it was stacked on.
    pub parent: String,
    /// When the branch was created.
    pub created_at: DateTime<Utc>,
}

impl BranchRecord {
    /// Record `name` as stacked on `parent`, created now.
    pub fn new(name: String, parent: String) -> Self {
        Self {
            name,
            parent,
            created_at: Utc::now(),
        }
    }
}

/// Persistent set of locally created stacked branches.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BranchRegistry {
    /// File format version.
    pub version: u32,
    /// Recorded branches.
    #[serde(default)]
    pub branches: Vec<BranchRecord>,
}

impl BranchRegistry {
    /// Create a new empty registry.
    pub const fn new() -> Self {
        Self {
            version: REGISTRY_VERSION,
            branches: Vec::new(),
        }
    }

    /// Check if a branch has a record.
    pub fn contains(&self, name: &str) -> bool {
        self.branches.iter().any(|b| b.name == name)
    }

    /// Check if the registry has no records.
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Get the parent recorded for a branch.
    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.branches
            .iter()
            .find(|b| b.name == name)
            .map(|b| b.parent.as_str())
    }

    /// Add a record, replacing any existing record for the same branch.
    pub fn record(&mut self, record: BranchRecord) {
        self.branches.retain(|b| b.name != record.name);
        self.branches.push(record);
    }

    /// Drop the record for a branch. Returns true if it was removed.
    pub fn forget(&mut self, name: &str) -> bool {
        let len_before = self.branches.len();
        self.branches.retain(|b| b.name != name);
        self.branches.len() < len_before
    }
}
