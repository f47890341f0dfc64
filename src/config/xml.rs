//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a commented template if missing (unless DERP_MOVE_CONFIG is set).
//!
//! Notes:
//! - This module only reads/writes the config file; directory validation
//!   happens elsewhere.
//! - Unknown XML fields are a hard failure to surface misconfigurations early.

use anyhow::{bail, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::paths::{config_path, path_has_symlink_ancestor};
use super::types::LogLevel;
use super::CONFIG_ENV;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    source_base: Option<String>,
    target_base: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

/// Settings read from the config file. Every field is optional here; the
/// command line may supply whatever the file leaves out, and the merge
/// decides what is actually required.
#[derive(Debug, Default)]
pub struct FileSettings {
    pub source_base: Option<PathBuf>,
    pub target_base: Option<PathBuf>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
}

/// Outcome of resolving the config file at startup.
#[derive(Debug)]
pub enum LoadResult {
    /// The config file existed and was parsed.
    Loaded(FileSettings),
    /// No file existed at the default location; a template was written there.
    CreatedTemplate(PathBuf),
}

/// Resolve and load the config file, creating a template when the default
/// location is empty. An explicit $DERP_MOVE_CONFIG pointing at a missing
/// file is an error rather than a silent fallback.
pub fn load_or_init() -> Result<LoadResult> {
    let path = config_path()?;

    if !path.exists() {
        if env::var_os(CONFIG_ENV).is_some() {
            bail!(
                "{} points to '{}', which does not exist",
                CONFIG_ENV,
                path.display()
            );
        }
        create_template_config(&path)?;
        return Ok(LoadResult::CreatedTemplate(path));
    }

    let settings = load_settings_from_path(&path)?;
    Ok(LoadResult::Loaded(settings))
}

/// Load settings from a specific XML file path (quick_xml).
pub fn load_settings_from_path(path: &Path) -> Result<FileSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&content)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;

    Ok(FileSettings {
        source_base: parsed.source_base.as_deref().and_then(nonempty_path),
        target_base: parsed.target_base.as_deref().and_then(nonempty_path),
        log_level: parsed
            .log_level
            .as_deref()
            .and_then(|s| LogLevel::parse(s.trim())),
        log_file: parsed.log_file.as_deref().and_then(nonempty_path),
    })
}

fn nonempty_path(s: &str) -> Option<PathBuf> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

/// Create the template config file and its parent directory.
/// Refuses to write through a symlinked ancestor; tightens permissions on
/// Unix (0700 dir, 0600 file, best-effort).
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(parent, fs::Permissions::from_mode(0o700));
        }
    }

    let content = "<!--\n  derp_move configuration (XML)\n\n  Fields:\n    source_base -> directory whose files are picked up (required)\n    target_base -> directory the renamed files are dropped into (required)\n    log_level   -> quiet | normal | info | debug\n    log_file    -> path to a log file (optional; stdout is always used)\n\n  Notes:\n    - CLI flags override XML values.\n    - Both bases must be set before the tool will run.\n-->\n<config>\n  <source_base></source_base>\n  <target_base></target_base>\n  <log_level>normal</log_level>\n  <log_file></log_file>\n</config>\n";

    fs::write(path, content).with_context(|| format!("write template '{}'", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }

    info!("Created template config at {}", path.display());
    Ok(())
}
