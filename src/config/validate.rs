//! Config validation logic.
//! Verifies directory existence, readability/writability, and that the two
//! bases are disjoint. The target base is never created here: a missing
//! target is the user's problem to fix, not ours to paper over.

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

use crate::errors::DerpMoveError;

use super::types::Config;

impl Config {
    /// Validate existence, readability/writability and canonical paths.
    pub fn validate(&self) -> Result<()> {
        let sb = &self.source_base;
        let tb = &self.target_base;

        // 1) Source base: must exist, be a directory, and be readable.
        ensure_dir_exists_and_is_dir(sb, "source_base")?;
        ensure_readable(sb, "source_base")?;

        // 2) Target base: must exist, be a directory, and be writable.
        ensure_dir_exists_and_is_dir(tb, "target_base")?;
        ensure_writable(tb, "target_base")?;

        // 3) Resolve symlinks and ensure the bases are disjoint (neither contains the other).
        let sb_real = fs::canonicalize(sb).unwrap_or_else(|_| sb.clone());
        let tb_real = fs::canonicalize(tb).unwrap_or_else(|_| tb.clone());

        if sb_real == tb_real {
            bail!(
                "source_base and target_base resolve to the same path: '{}'",
                sb_real.display()
            );
        }
        if sb_real.starts_with(&tb_real) {
            bail!(
                "source_base '{}' must not be inside target_base '{}'",
                sb_real.display(),
                tb_real.display()
            );
        }
        if tb_real.starts_with(&sb_real) {
            bail!(
                "target_base '{}' must not be inside source_base '{}'",
                tb_real.display(),
                sb_real.display()
            );
        }

        info!(
            "Config validated: source='{}' target='{}' log_file='{}'",
            sb.display(),
            tb.display(),
            self.log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".into())
        );
        Ok(())
    }
}

/// Ensure path exists and is a directory; emit clear errors with path context.
fn ensure_dir_exists_and_is_dir(path: &Path, name: &str) -> Result<()> {
    if !path.exists() {
        error!("{name} does not exist: {}", path.display());
        return Err(DerpMoveError::NotFound(path.to_path_buf()).into());
    }
    if !path.is_dir() {
        error!("{name} is not a directory: {}", path.display());
        bail!("{name} is not a directory: {}", path.display());
    }
    Ok(())
}

/// Ensure directory is readable by attempting to open its entries.
fn ensure_readable(path: &Path, name: &str) -> Result<()> {
    if let Err(e) = fs::read_dir(path) {
        error!("{name} not readable: {}: {e}", path.display());
        return Err(DerpMoveError::Access {
            path: path.to_path_buf(),
            context: format!("cannot read {name} directory: {e}"),
        }
        .into());
    }
    debug!("{name} readable: {}", path.display());
    Ok(())
}

/// Ensure directory is writable using a non-destructive probe file.
fn ensure_writable(path: &Path, name: &str) -> Result<()> {
    let probe = path.join(format!(".derp_move_probe_{}.tmp", std::process::id()));
    match fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&probe)
    {
        Ok(_) => {
            let _ = fs::remove_file(&probe);
            debug!("{name} writable: {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("{name} not writable: {}: {e}", path.display());
            Err(DerpMoveError::Access {
                path: path.to_path_buf(),
                context: format!("cannot write to {name}: {e}"),
            }
            .into())
        }
    }
}
