//! Core library for `derp_move`.
//!
//! Lists the regular files directly inside a source directory, derives a
//! tagged name for each one, and moves them into a target directory. The
//! crate is split into configuration (types, XML loading, validation), the
//! pipeline stages under `fs_ops` (listing, naming, pairing, moving), and
//! the logging/output plumbing shared with the CLI.

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod logging;
pub mod output;

pub use config::{Config, LogLevel};
pub use errors::DerpMoveError;
pub use fs_ops::{
    create_file_pair, list_entries, list_files, move_pair, plan_moves, run_pipeline,
    transform_file_name, FilePair, EXTENSION_SEPARATOR, MOVE_MARKER,
};
