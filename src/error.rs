//! Error types for suma-export library.

use std::io;
use thiserror::Error;

/// Result type alias for suma-export operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding a summary or writing a PDF.
///
/// Malformed optional summary fields are never reported here; they are
/// dropped during decoding and the rest of the summary is still exported.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing the exported file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The summary text is not JSON, or not a JSON object or string.
    #[error("Invalid summary JSON: {0}")]
    Json(String),

    /// Error assembling or serializing the PDF structure.
    #[error("PDF writing error: {0}")]
    Pdf(String),

    /// Export options leave no usable area on the page.
    #[error("Invalid export options: {0}")]
    InvalidOptions(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
