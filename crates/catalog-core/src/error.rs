//! Error types for catalog loading and export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog or serializing results.
///
/// Per-field parse failures are NOT errors: an unparseable time or date is
/// recorded as an absent value (with a `tracing::warn!`) and processing
/// continues. Only file-level and structural problems surface here.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table contained no data rows at all.
    #[error("no data rows found in the source table")]
    EmptyTable,

    /// The header row lacks columns the layout requires.
    #[error("missing required column(s): {0}")]
    MissingColumns(String),

    /// Two rows carried the same course id (named layout only).
    #[error("duplicate course id: {0}")]
    DuplicateId(String),

    /// JSON serialization of an export failed.
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout catalog-core.
pub type Result<T> = std::result::Result<T, CatalogError>;
