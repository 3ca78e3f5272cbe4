//! API layer for pdfsplit-rs
//!
//! Text extraction from PDFs and the extract-then-split pipeline.

pub mod extractor;
pub mod pipeline;

// Re-export main API types
pub use extractor::{ExtractedText, TextExtractor, TextSource};
pub use pipeline::{quick_split, split_pdf};
