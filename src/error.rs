//! Error types for stanza.

use crate::sonnet::SonnetId;

/// Errors that can occur while searching, loading or saving.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two results for different sonnets were combined.
    #[error("cannot combine results of sonnet {left} with results of sonnet {right}")]
    InvalidCombination {
        /// Sonnet of the receiving result.
        left: SonnetId,
        /// Sonnet of the result passed in.
        right: SonnetId,
    },

    /// Two sonnets in one corpus share an id.
    #[error("sonnet id {id} is used more than once")]
    DuplicateSonnetId {
        /// The repeated id.
        id: SonnetId,
    },

    /// A setting could not be parsed.
    #[error("invalid value {value:?} for setting `{key}`")]
    InvalidSetting {
        /// The setting name.
        key: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Reading or writing a corpus or configuration file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A corpus or configuration file is not valid JSON.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for stanza operations.
pub type Result<T> = std::result::Result<T, Error>;
