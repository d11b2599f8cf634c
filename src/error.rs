//! Error Types
//!
//! None of these escape to the user; they are logged and converted at the
//! storage and store boundaries.

use thiserror::Error;

/// Failures talking to the persistent key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },

    #[error("failed to encode `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejected list mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("todo text is empty")]
    EmptyText,
}
