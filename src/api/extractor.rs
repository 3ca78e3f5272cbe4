//! TextExtractor - PDF to text with OCR fallback
//!
//! Embedded text is returned directly. Documents without any embedded text are
//! uploaded to the OCR backend, provided they stay within the page ceiling.

use crate::config::{Config, OcrConfig};
use crate::error::{PdfSplitError, Result};
use crate::ocr::{DocumentAiClient, OcrBackend, ProcessRequest};
use crate::text::{PdfDocument, PdfProcessor};
use std::path::Path;
use std::sync::Arc;

/// Where extracted text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// Text embedded in the PDF content streams
    Embedded,

    /// Text recognized by the OCR backend
    Ocr,
}

/// Text of a document together with its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub source: TextSource,
}

/// Extracts text from PDF files
pub struct TextExtractor {
    config: OcrConfig,
    backend: Arc<dyn OcrBackend>,
}

impl TextExtractor {
    /// Create an extractor backed by Google Document AI
    pub fn new(config: &Config) -> Result<Self> {
        let backend = DocumentAiClient::new(&config.ocr)?;
        Ok(Self::with_backend(config.ocr.clone(), Arc::new(backend)))
    }

    /// Create an extractor with an explicit OCR backend
    pub fn with_backend(config: OcrConfig, backend: Arc<dyn OcrBackend>) -> Self {
        Self { config, backend }
    }

    /// Extract the text of a PDF, running OCR only when none is embedded
    pub async fn extract_text<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        Ok(self.extract(path).await?.text)
    }

    /// Like [`extract_text`](Self::extract_text), also reporting which path was taken
    pub async fn extract<P: AsRef<Path>>(&self, path: P) -> Result<ExtractedText> {
        let document = PdfProcessor::load(path).await?;

        if document.has_text() {
            log::info!("✅ Using embedded text from {}", document.path.display());
            return Ok(ExtractedText {
                text: document.text,
                source: TextSource::Embedded,
            });
        }

        log::info!(
            "🔍 No embedded text in {}, falling back to OCR",
            document.path.display()
        );
        let text = self.ocr_document(&document).await?;

        Ok(ExtractedText {
            text,
            source: TextSource::Ocr,
        })
    }

    /// Run OCR on a PDF regardless of its embedded text
    pub async fn perform_ocr<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let document = PdfProcessor::load(path).await?;
        self.ocr_document(&document).await
    }

    async fn ocr_document(&self, document: &PdfDocument) -> Result<String> {
        if document.page_count > self.config.max_pages {
            log::warn!(
                "Refusing OCR for {}: {} pages exceeds limit of {}",
                document.path.display(),
                document.page_count,
                self.config.max_pages
            );
            return Err(PdfSplitError::PageLimitExceeded {
                path: document.path.clone(),
                pages: document.page_count,
                limit: self.config.max_pages,
            });
        }

        self.config.validate()?;

        let request = ProcessRequest::pdf(self.config.processor_name(), &document.bytes);
        let text = self.backend.process_document(request).await?;

        log::info!(
            "✅ OCR returned {} chars for {}",
            text.chars().count(),
            document.path.display()
        );

        Ok(text)
    }
}
