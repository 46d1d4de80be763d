//! Error handling for HipMark
//!
//! Covers the I/O boundary shared by every crate: reading and writing the
//! label store, exporting reports, and decoding images. All error types use
//! `thiserror` for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for HipMark I/O operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An image could not be opened or decoded
    #[error("Could not load image {path:?}: {reason}")]
    ImageLoad {
        /// The image that failed to load.
        path: PathBuf,
        /// The decoder's explanation.
        reason: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an image load error
    pub fn is_image_load(&self) -> bool {
        matches!(self, Error::ImageLoad { .. })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
