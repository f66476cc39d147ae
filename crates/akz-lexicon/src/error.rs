//! Error types for the akz-lexicon crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading the lexicon or persisting favorites.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Failed to read the lexicon artifact.
    #[error("failed to read lexicon at {path}: {source}")]
    Read {
        /// Path to the lexicon file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The lexicon artifact is not valid dictionary JSON.
    ///
    /// This is fatal: the application cannot run without its data and
    /// there is no partial-load mode.
    #[error("malformed lexicon data: {0}")]
    Parse(String),

    /// Failed to persist the favorites file.
    #[error("failed to write favorites: {0}")]
    FavoritesWrite(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl LexiconError {
    /// Creates a `Parse` error from a serde_json error.
    pub(crate) fn parse(source: &serde_json::Error) -> Self {
        Self::Parse(source.to_string())
    }
}
