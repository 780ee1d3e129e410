//! Error types for the save file and catalog loaders.

use thiserror::Error;

/// Errors raised while reading or writing the save file.
#[derive(Debug, Error)]
pub enum SaveLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("save file is corrupted: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to encode save data: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog defines no creatures")]
    NoCreatures,
}
