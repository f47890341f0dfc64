//! Rename helper.
//! Performs the rename with context-rich errors and a best-effort fsync of
//! the destination directory afterwards (a no-op off Unix). The destination
//! is never removed first: callers check for collisions before getting
//! here, and overwrite is not part of the contract.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub(super) fn try_rename(src: &Path, dst: &Path) -> Result<()> {
    fs::rename(src, dst)
        .with_context(|| format!("rename '{}' -> '{}'", src.display(), dst.display()))?;

    if let Some(parent) = dst.parent() {
        // Ignore fsync errors to avoid turning a successful rename into a failure.
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}
