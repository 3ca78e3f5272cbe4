//! Error types for pdfsplit-rs
//!
//! Every failure in the extraction pipeline or the chunker surfaces as a
//! [`PdfSplitError`]. Variants carry the path, page count or remote cause so a
//! failure can be diagnosed without re-running.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed cause attached to remote OCR failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for pdfsplit operations
#[derive(Error, Debug)]
pub enum PdfSplitError {
    /// The document could not be read from disk
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a well-formed PDF
    #[error("Failed to parse PDF {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// OCR refused before any remote call
    #[error("PDF {} has {pages} pages, OCR is limited to {limit}", .path.display())]
    PageLimitExceeded {
        path: PathBuf,
        pages: usize,
        limit: usize,
    },

    /// The remote OCR call failed or returned a malformed response
    #[error("OCR error: {message}")]
    Ocr {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Chunking invoked with a non-positive part length
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for pdfsplit operations
pub type Result<T> = std::result::Result<T, PdfSplitError>;

impl PdfSplitError {
    /// I/O failure tied to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PdfSplitError::Io {
            path: path.into(),
            source,
        }
    }

    /// OCR failure without an underlying error value
    pub fn ocr(message: impl Into<String>) -> Self {
        PdfSplitError::Ocr {
            message: message.into(),
            source: None,
        }
    }

    /// OCR failure wrapping its cause
    pub fn ocr_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PdfSplitError::Ocr {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<reqwest::Error> for PdfSplitError {
    fn from(err: reqwest::Error) -> Self {
        PdfSplitError::ocr_with_source(format!("request to OCR service failed: {}", err), err)
    }
}
