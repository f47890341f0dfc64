use std::path::{Path, PathBuf};

use crate::errors::DerpMoveError;

use super::naming::transform_file_name;

/// One pending relocation: where a file is now, and where it should land.
/// Keeping both ends in a single value means the planned list can never
/// drift out of step between planning and execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
}

/// Build the pair for `name`: the original name under `source_base`, the
/// transformed name under `target_base`. Pure path composition; nothing is
/// checked against the filesystem here.
pub fn create_file_pair(
    name: &str,
    source_base: &Path,
    target_base: &Path,
) -> Result<FilePair, DerpMoveError> {
    let new_name = transform_file_name(name)?;
    Ok(FilePair {
        old_path: source_base.join(name),
        new_path: target_base.join(new_name),
    })
}
