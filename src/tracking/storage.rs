//! Persistence for the branch registry in `<git-dir>/taki/`.

use super::{BranchRegistry, REGISTRY_VERSION};
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name for taki metadata within the git directory.
const TAKI_DIR: &str = "taki";

/// Filename for the branch registry.
const REGISTRY_FILE: &str = "branches.toml";

/// Get path to the taki metadata directory.
fn taki_dir(git_dir: &Path) -> PathBuf {
    git_dir.join(TAKI_DIR)
}

/// Get path to the branch registry file.
pub fn registry_path(git_dir: &Path) -> PathBuf {
    taki_dir(git_dir).join(REGISTRY_FILE)
}

/// Load the branch registry from disk.
///
/// Returns an empty `BranchRegistry` if the file doesn't exist.
pub fn load_registry(git_dir: &Path) -> Result<BranchRegistry> {
    let path = registry_path(git_dir);

    if !path.exists() {
        return Ok(BranchRegistry::new());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Tracking(format!("failed to read {}: {e}", path.display())))?;

    let registry: BranchRegistry = toml::from_str(&content)
        .map_err(|e| Error::Tracking(format!("failed to parse {}: {e}", path.display())))?;

    Ok(registry)
}

/// Save the branch registry to disk.
///
/// Creates the `<git-dir>/taki/` directory if it doesn't exist.
pub fn save_registry(git_dir: &Path, registry: &BranchRegistry) -> Result<()> {
    let dir = taki_dir(git_dir);
    let path = dir.join(REGISTRY_FILE);

    // Ensure directory exists
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .map_err(|e| Error::Tracking(format!("failed to create {}: {e}", dir.display())))?;
    }

    // Serialize with version
    let mut to_save = registry.clone();
    to_save.version = REGISTRY_VERSION;

    let content = toml::to_string_pretty(&to_save)
        .map_err(|e| Error::Tracking(format!("failed to serialize branch registry: {e}")))?;

    // Add header comment
    let content_with_header = format!(
        "# taki branch metadata\n# Auto-generated - manual edits may be overwritten\n\n{content}"
    );

    fs::write(&path, content_with_header)
        .map_err(|e| Error::Tracking(format!("failed to write {}: {e}", path.display())))?;

    Ok(())
}
