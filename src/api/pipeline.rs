//! Extract-then-split pipeline
//!
//! Convenience entry points that turn a PDF path into the ordered parts a chat
//! session consumes.

use crate::api::TextExtractor;
use crate::config::Config;
use crate::error::Result;
use crate::text::{FilePart, chunk_text};
use std::path::Path;

/// Extract a PDF's text and split it into parts
///
/// `max_part_length` follows [`chunk_text`]: `None` yields no parts, a
/// non-positive value is an error.
///
/// # Examples
/// ```no_run
/// use pdfsplit_rs::{Config, TextExtractor, split_pdf};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let extractor = TextExtractor::new(&Config::from_env()?)?;
///     let parts = split_pdf(&extractor, "report.pdf", Some(10_000)).await?;
///     for part in &parts {
///         println!("{} ({} bytes)", part.name, part.content.len());
///     }
///     Ok(())
/// }
/// ```
pub async fn split_pdf<P: AsRef<Path>>(
    extractor: &TextExtractor,
    path: P,
    max_part_length: Option<i64>,
) -> Result<Vec<FilePart>> {
    let path = path.as_ref();
    let extracted = extractor.extract(path).await?;
    let parts = chunk_text(&extracted.text, max_part_length)?;

    log::info!(
        "✂️  Split {} ({:?} text) into {} parts",
        path.display(),
        extracted.source,
        parts.len()
    );

    Ok(parts)
}

/// One-shot split using a Document AI backend built from `config`
pub async fn quick_split<P: AsRef<Path>>(path: P, config: &Config) -> Result<Vec<FilePart>> {
    config.validate()?;
    let extractor = TextExtractor::new(config)?;
    let max_part_length = i64::try_from(config.splitter.max_part_length).ok();
    split_pdf(&extractor, path, max_part_length).await
}
