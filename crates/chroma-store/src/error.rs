//! Storage error types.
//!
//! A missing palette is never an error: `get` returns `Option` and
//! `delete` returns `bool`. These variants cover genuine store failures
//! only.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O failure with the operation and path for context.
    #[error("failed to {operation} {}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A palette could not be serialized for writing.
    #[error("failed to serialize palette {id}")]
    Serialize {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// A stored document could not be parsed back into a palette.
    #[error("corrupt palette document {}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
