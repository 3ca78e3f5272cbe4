//! Remote OCR for documents without embedded text
//!
//! The extractor talks to OCR through [`OcrBackend`], so the Document AI
//! client can be swapped for a stub in tests.

pub mod client;
pub mod request;

use crate::error::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

pub use client::DocumentAiClient;
pub use request::{PDF_MIME_TYPE, ProcessRequest, ProcessResponse, ProcessedDocument, RawDocument};

/// A remote capability that turns an uploaded document into text
#[cfg_attr(test, automock)]
#[async_trait]
pub trait OcrBackend: Send + Sync {
    /// Submit one request and return the recognized text verbatim
    async fn process_document(&self, request: ProcessRequest) -> Result<String>;
}
