//! Typed error definitions for derp_move.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DerpMoveError {
    #[error("Cannot access {path}: {context}")]
    Access { path: PathBuf, context: String },

    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("Cannot derive a new name for '{name}': {reason}")]
    NameFormat { name: String, reason: String },

    #[error("Destination already exists, refusing to overwrite: {0}")]
    Collision(PathBuf),
}

impl DerpMoveError {
    /// Stable machine-readable code used in structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Access { .. } => "access",
            Self::NotFound(_) => "not_found",
            Self::NameFormat { .. } => "name_format",
            Self::Collision(_) => "collision",
        }
    }
}
