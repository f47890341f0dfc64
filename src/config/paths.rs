//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked
//! ancestors for safety.

use anyhow::{anyhow, Result};
use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::CONFIG_ENV;

/// Effective config file location: $DERP_MOVE_CONFIG wins, else the OS
/// default under the user's config directory.
pub fn config_path() -> Result<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(p));
    }
    default_config_path()
}

/// OS-appropriate default config path.
pub fn default_config_path() -> Result<PathBuf> {
    let base = config_dir().ok_or_else(|| anyhow!("no OS config directory available"))?;
    Ok(base.join("derp_move").join("config.xml"))
}

/// OS-appropriate default log file path (data dir).
pub fn default_log_path() -> Result<PathBuf> {
    let base = data_dir().ok_or_else(|| anyhow!("no OS data directory available"))?;
    let dir = base.join("derp_move");
    // ensure dir exists (best-effort)
    let _ = fs::create_dir_all(&dir);
    Ok(dir.join("derp_move.log"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
