//! Error types for loading, normalizing and comparing solver results.

use std::path::PathBuf;
use thiserror::Error;

/// Shape problem found while normalizing a solver result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("top-level value is not a JSON object")]
    NotAnObject,
    #[error("missing `{0}` field")]
    MissingField(String),
    #[error("`{0}` is not an array")]
    NotAnArray(String),
    #[error("`{field}` entry {index} is not a JSON object")]
    EntryNotAnObject { field: String, index: usize },
}

/// Any failure that is not a designed mismatch.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed solver result in {}: {source}", .path.display())]
    Structure {
        path: PathBuf,
        #[source]
        source: StructureError,
    },
    #[error("cannot write diagnostic output: {0}")]
    Output(#[from] std::io::Error),
}

impl CompareError {
    /// Path of the input file the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            CompareError::Io { path, .. }
            | CompareError::Parse { path, .. }
            | CompareError::Structure { path, .. } => Some(path),
            CompareError::Output(_) => None,
        }
    }
}
