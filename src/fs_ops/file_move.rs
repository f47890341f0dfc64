//! Single-file relocation.
//! Attempts a plain rename; on a cross-device error, falls back to
//! copy-then-delete. Never overwrites: an occupied destination is an error.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

use crate::errors::DerpMoveError;

use super::atomic::try_rename;
use super::copy::safe_copy_and_remove;
use super::pair::FilePair;
use super::util::is_cross_device;

/// Move the file at `pair.old_path` to `pair.new_path`.
///
/// Preconditions are checked up front so the failure modes stay typed:
/// - missing source -> NotFound
/// - missing destination parent -> NotFound
/// - occupied destination -> Collision (some platforms' native rename
///   would silently overwrite, so this is refused before renaming)
pub fn move_pair(pair: &FilePair) -> Result<()> {
    let src = pair.old_path.as_path();
    let dest = pair.new_path.as_path();
    info!("Moving {} to {}...", src.display(), dest.display());

    if let Err(e) = fs::symlink_metadata(src) {
        return if e.kind() == io::ErrorKind::NotFound {
            Err(DerpMoveError::NotFound(src.to_path_buf()).into())
        } else {
            Err(e).with_context(|| format!("stat '{}'", src.display()))
        };
    }
    if let Some(parent) = nonempty_parent(dest) {
        if !parent.exists() {
            return Err(DerpMoveError::NotFound(parent.to_path_buf()).into());
        }
    }
    if fs::symlink_metadata(dest).is_ok() {
        return Err(DerpMoveError::Collision(dest.to_path_buf()).into());
    }

    match try_rename(src, dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "Move successful.");
            Ok(())
        }
        Err(e) => {
            let cross = e
                .downcast_ref::<io::Error>()
                .map(is_cross_device)
                .unwrap_or(false);
            if !cross {
                return Err(e)
                    .with_context(|| format!("move '{}' -> '{}'", src.display(), dest.display()));
            }
            warn!(error = %e, "Rename crossed filesystems, using copy+delete");
            safe_copy_and_remove(src, dest)?;
            info!(src = %src.display(), dest = %dest.display(), "Move successful (copied across filesystems).");
            Ok(())
        }
    }
}

/// Parent of `path`, ignoring the empty parent a bare file name yields.
fn nonempty_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}
