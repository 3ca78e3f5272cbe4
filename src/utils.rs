//! Utility functions for pdfsplit-rs
//!
//! File helpers shared by the library and the CLI.

use crate::error::{PdfSplitError, Result};
use crate::text::FilePart;
use std::path::{Path, PathBuf};

/// Check if a path names a PDF file
pub fn is_pdf_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Format file size in human readable format
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Create `path` and any missing parents
pub fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    std::fs::create_dir_all(path).map_err(|e| PdfSplitError::io(path, e))
}

/// Write each part's content to `dir/<part name>`, returning the paths in order
pub fn write_parts<P: AsRef<Path>>(dir: P, parts: &[FilePart]) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    ensure_directory(dir)?;

    let mut written = Vec::with_capacity(parts.len());
    for part in parts {
        let path = dir.join(&part.name);
        std::fs::write(&path, &part.content).map_err(|e| PdfSplitError::io(&path, e))?;
        written.push(path);
    }

    log::info!("💾 Wrote {} parts to {}", written.len(), dir.display());
    Ok(written)
}
