//! Error types for palette format operations.

use thiserror::Error;

/// Errors that can occur while writing a palette.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No format registered under this ID
    #[error("Unknown palette format '{id}'")]
    UnknownFormat {
        /// The requested format ID
        id: String,
    },

    /// Palette content the format cannot represent
    #[error("Invalid palette for '{format}': {message}")]
    InvalidPalette {
        /// The format that rejected the palette
        format: String,
        /// Description of the problem
        message: String,
    },
}

impl FormatError {
    /// Create an unknown format error.
    pub fn unknown_format(id: impl Into<String>) -> Self {
        Self::UnknownFormat { id: id.into() }
    }

    /// Create an invalid palette error.
    pub fn invalid_palette(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPalette {
            format: format.into(),
            message: message.into(),
        }
    }
}
