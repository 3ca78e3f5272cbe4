//! # pdfsplit-rs
//!
//! Extracts the text of a PDF, falling back to Google Document AI OCR when the
//! document has no embedded text, and splits it into numbered parts that can be
//! fed one by one into a chat model with a prompt-length limit.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdfsplit_rs::{Config, TextExtractor, chunk_text};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let extractor = TextExtractor::new(&config)?;
//!
//!     let text = extractor.extract_text("scanned.pdf").await?;
//!     let parts = chunk_text(&text, Some(10_000))?;
//!
//!     for part in parts {
//!         println!("{}:\n{}", part.name, part.content);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Core modules
pub mod api;
pub mod config;
pub mod error;
pub mod ocr;
pub mod text;
pub mod utils;

// Re-export main API types
pub use api::{ExtractedText, TextExtractor, TextSource, quick_split, split_pdf};
pub use config::Config;
pub use error::{PdfSplitError, Result};

// Re-export commonly used types
pub use ocr::{DocumentAiClient, OcrBackend, ProcessRequest};
pub use text::{FilePart, chunk_text, split_prompt};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_imports() {
        // Ensure all major types can be imported
        let _config = Config::default();
        let _parts: Vec<FilePart> = chunk_text("", Some(1)).unwrap();
    }
}
