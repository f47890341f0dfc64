//! Directory listing.
//! Non-recursive by contract: only names directly inside the given
//! directory are returned, and only regular files survive the filter.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Every entry name directly inside `dir` (files and directories alike).
/// Order is whatever the OS enumeration yields; callers must not rely on it.
pub fn list_entries(dir: &Path) -> Result<Vec<OsString>> {
    info!("Retrieving contents of {}", dir.display());
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| {
        format!(
            "Cannot read directory '{}'; check that it exists and is readable",
            dir.display()
        )
    })? {
        let entry = entry.with_context(|| format!("read entry of '{}'", dir.display()))?;
        names.push(entry.file_name());
    }
    info!("Contents retrieved. {} items found.", names.len());
    Ok(names)
}

/// Names of the regular files directly inside `dir`.
/// Entries are checked with symlink_metadata so links are never followed:
/// a symlink to a directory (or to a file) does not count as a regular file.
pub fn list_files(dir: &Path) -> Result<Vec<OsString>> {
    let mut files = Vec::new();
    for name in list_entries(dir)? {
        let full = dir.join(&name);
        let meta =
            fs::symlink_metadata(&full).with_context(|| format!("stat '{}'", full.display()))?;
        if meta.file_type().is_file() {
            files.push(name);
        } else {
            debug!(path = %full.display(), "skipping non-file entry");
        }
    }
    info!("Returning files. {} files found.", files.len());
    Ok(files)
}
