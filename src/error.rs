//! Catalog error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced when exporting or explicitly parsing catalog data.
///
/// The normal load path never returns these; it logs a warning and
/// falls back to the hardcoded default tables instead.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse RON data: {0}")]
    RonParse(#[from] ron::error::SpannedError),

    #[error("failed to serialize RON data: {0}")]
    RonSerialize(#[from] ron::Error),

    #[error("failed to parse JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContentError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
