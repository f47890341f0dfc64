//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - CLI flags override config values (which are loaded from XML if present).
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::LogLevel;

/// CLI wrapper for the derp_move library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Sweep files out of a staging folder, tagging each name on the way (Rust)"
)]
pub struct Args {
    /// Override the source base directory (normally configured via XML).
    #[arg(long, value_hint = ValueHint::DirPath, help = "Override the source base directory")]
    pub source_base: Option<PathBuf>,

    /// Override the target base directory (normally configured via XML).
    #[arg(long, value_hint = ValueHint::DirPath, help = "Override the target base directory")]
    pub target_base: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Print where derp_move will look for the config file (or DERP_MOVE_CONFIG if set), then exit.
    #[arg(
        long,
        help = "Print the config file location used by derp_move and exit"
    )]
    pub print_config: bool,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
