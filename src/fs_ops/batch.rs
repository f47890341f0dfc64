//! Pipeline orchestration.
//! Two strictly sequential passes: first every pending move is planned,
//! then each pair is executed in order. The first failure aborts the rest
//! of the batch; earlier moves stay where they landed.

use anyhow::Result;
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::DerpMoveError;

use super::file_move::move_pair;
use super::list::list_files;
use super::pair::{create_file_pair, FilePair};

/// List the source base and build one FilePair per regular file found.
/// The result corresponds 1:1 with the listing: nothing is dropped or
/// duplicated between listing and pairing.
pub fn plan_moves(config: &Config) -> Result<Vec<FilePair>> {
    info!("Retrieving files...");
    let names = list_files(&config.source_base)?;

    info!("Generating target filepaths...");
    let mut pairs = Vec::with_capacity(names.len());
    for name in &names {
        let name = name.to_str().ok_or_else(|| DerpMoveError::NameFormat {
            name: name.to_string_lossy().into_owned(),
            reason: "file name is not valid UTF-8".into(),
        })?;
        let pair = create_file_pair(name, &config.source_base, &config.target_base)?;
        debug!(old = %pair.old_path.display(), new = %pair.new_path.display(), "planned move");
        pairs.push(pair);
    }
    Ok(pairs)
}

/// Run the full pipeline: plan every move, then execute them in order.
/// Returns the executed pairs. An empty source directory is a successful
/// no-op, which is what a second run over the same source produces.
pub fn run_pipeline(config: &Config) -> Result<Vec<FilePair>> {
    let pairs = plan_moves(config)?;

    info!("Moving files...");
    for pair in &pairs {
        move_pair(pair)?;
    }
    info!("All tasks completed.");
    Ok(pairs)
}
