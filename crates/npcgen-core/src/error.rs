//! Error types for NPC generation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for generation and table operations.
pub type NpcResult<T> = Result<T, NpcError>;

/// Errors that can occur while loading tables or generating an NPC.
#[derive(Debug, Error)]
pub enum NpcError {
    /// No NPC type was selected.
    #[error("no NPC type selected")]
    MissingNpcType,

    /// A table file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    TableRead {
        /// Path of the table file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A table file is not valid JSON for its shape.
    #[error("cannot parse {table}: {source}")]
    TableParse {
        /// Name of the table file.
        table: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A trait pair does not split into exactly two non-empty poles.
    #[error("invalid trait pair: \"{0}\"")]
    InvalidTraitPair(String),

    /// The plane table has no entries.
    #[error("no planes to choose from")]
    NoPlanes,

    /// A plane has no alignment strings.
    #[error("plane '{0}' has no alignments")]
    EmptyPlane(String),
}
