//! Text processing for pdfsplit-rs
//!
//! PDF parsing with embedded text extraction, and prompt splitting.

pub mod chunking;
pub mod pdf;

// Re-export main types and functions
pub use chunking::{ALL_PARTS_SENT, FilePart, chunk_text, part_name, split_prompt};
pub use pdf::{PdfDocument, PdfProcessor};
