//! Error types for the retouch-core library.
//!
//! Every editing failure here is recoverable: an operation that cannot run
//! declines to mutate state and reports why, it never leaves a half-written
//! buffer behind.

use thiserror::Error;

/// Errors that can occur within the retouch-core library.
#[derive(Error, Debug)]
pub enum EditError {
    /// An edit, undo or reset was attempted before any image was loaded.
    #[error("No image is loaded")]
    NotLoaded,

    /// The selection has zero width or height after clamping to the buffer,
    /// or no selection was made at all.
    #[error("Selection area is empty or outside the image")]
    DegenerateSelection,

    /// Undo was requested with nothing on the history stack.
    #[error("Nothing to undo")]
    EmptyHistory,

    /// Reset was requested before an original image was ever captured.
    #[error("No original image to reset to")]
    NoOriginal,

    /// Configuration-related errors (invalid values, bad environment).
    #[error("Configuration error: {0}")]
    Config(String),

    /// UI-related errors (window creation, rendering backend).
    #[error("UI error: {0}")]
    Ui(String),

    /// Image decoding or encoding failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EditError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a UI error with the given message.
    pub fn ui(msg: impl Into<String>) -> Self {
        Self::Ui(msg.into())
    }

    /// Whether this error is one of the benign "operation declined"
    /// conditions, as opposed to an I/O or environment failure.
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            Self::NotLoaded | Self::DegenerateSelection | Self::EmptyHistory | Self::NoOriginal
        )
    }
}

/// A convenient alias for Result with [`EditError`].
pub type Result<T> = std::result::Result<T, EditError>;
