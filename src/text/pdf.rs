//! PDF loading and embedded text extraction
//!
//! A document is read and parsed once. The parsed form keeps the raw bytes so
//! the OCR path can upload them without touching the file again.

use crate::error::{PdfSplitError, Result};
use lopdf::Document;
use std::path::{Path, PathBuf};

/// A parsed PDF document
#[derive(Debug, Clone)]
pub struct PdfDocument {
    /// Where the bytes came from
    pub path: PathBuf,

    /// Raw file contents
    pub bytes: Vec<u8>,

    /// Number of pages in the page tree
    pub page_count: usize,

    /// Embedded text of all pages, in page order
    pub text: String,
}

impl PdfDocument {
    /// Whether the document carries any non-whitespace embedded text
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// PDF processing entry points
pub struct PdfProcessor;

impl PdfProcessor {
    /// Read and parse a PDF file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<PdfDocument> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| PdfSplitError::io(path, e))?;

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());

        Self::parse(path, bytes)
    }

    /// Parse PDF bytes that were read from `path`
    pub fn parse<P: AsRef<Path>>(path: P, bytes: Vec<u8>) -> Result<PdfDocument> {
        let path = path.as_ref();
        let document = Document::load_mem(&bytes).map_err(|e| PdfSplitError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        let text = embedded_text(path, &document, &page_numbers);

        log::info!(
            "📄 Parsed {}: {} pages, {} chars of embedded text",
            path.display(),
            page_numbers.len(),
            text.trim().chars().count()
        );

        Ok(PdfDocument {
            path: path.to_path_buf(),
            bytes,
            page_count: page_numbers.len(),
            text,
        })
    }
}

/// Concatenate every fragment lopdf can decode
///
/// Fonts without a usable encoding (e.g. `Identity-H` with no `ToUnicode` map)
/// contribute nothing, so such a document looks blank and goes to OCR.
fn embedded_text(path: &Path, document: &Document, page_numbers: &[u32]) -> String {
    let mut text = String::new();
    let mut failures = 0usize;

    for fragment in document.extract_text_chunks(page_numbers) {
        match fragment {
            Ok(fragment) => text.push_str(&fragment),
            Err(e) => {
                failures += 1;
                log::debug!("Undecodable text in {}: {}", path.display(), e);
            }
        }
    }

    if failures > 0 {
        log::warn!(
            "⚠️  {} text fragments in {} could not be decoded",
            failures,
            path.display()
        );
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_garbage_is_parse_error() {
        let result = PdfProcessor::parse("junk.pdf", b"definitely not a pdf".to_vec());

        match result {
            Err(PdfSplitError::Parse { path, .. }) => assert_eq!(path, PathBuf::from("junk.pdf")),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_has_text_ignores_whitespace() {
        let mut document = PdfDocument {
            path: PathBuf::from("doc.pdf"),
            bytes: Vec::new(),
            page_count: 1,
            text: " \n\t\n".to_string(),
        };
        assert!(!document.has_text());

        document.text.push_str("word");
        assert!(document.has_text());
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let result = PdfProcessor::load("/nonexistent/dir/file.pdf").await;
        assert!(matches!(result, Err(PdfSplitError::Io { .. })));
    }
}
