//! Error type shared by the whole crate.

use crate::phase::PhaseError;
use std::path::PathBuf;

/// Everything that can abort a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed variant data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("variant {index} is out of range, the data holds {count} variant(s)")]
    VariantOutOfRange { index: usize, count: usize },

    #[error("task '{task}': {reason}")]
    Shape { task: &'static str, reason: String },

    #[error("cannot evaluate phase '{expression}': {source}")]
    Phase {
        expression: String,
        #[source]
        source: PhaseError,
    },

    #[error("chart surface failed: {0}")]
    Surface(String),
}

pub type Result<T> = std::result::Result<T, Error>;
