//! Config module.
//! Provides configuration types, default paths, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{config_path, default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, load_or_init, load_settings_from_path, FileSettings, LoadResult};

/// Environment variable naming an explicit config file location.
pub const CONFIG_ENV: &str = "DERP_MOVE_CONFIG";
