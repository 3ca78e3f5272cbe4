//! Prompt splitting
//!
//! Splits text into fixed-size parts that are meant to be pasted one at a time
//! into a chat conversation with a prompt-length limit. Every part is wrapped
//! with markers telling the model to acknowledge and wait until the final part
//! arrives.

use crate::error::{PdfSplitError, Result};
use serde::{Deserialize, Serialize};

/// Trailer appended after the last part
pub const ALL_PARTS_SENT: &str = "ALL PARTS SENT. Now you can continue processing the request.";

/// One annotated part of a split text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilePart {
    /// File-style name, e.g. `split_002_of_010.txt`
    pub name: String,

    /// Raw slice wrapped with the part markers
    pub content: String,

    /// 1-based position of this part
    pub index: usize,

    /// Number of parts in the sequence
    pub total: usize,

    /// Byte offset of the raw slice in the source text
    pub offset: usize,

    /// Byte length of the raw slice
    pub length: usize,
}

impl FilePart {
    pub fn is_last(&self) -> bool {
        self.index == self.total
    }

    /// The raw slice, recovered from `content`
    pub fn body(&self) -> Option<&str> {
        let start = format!("{}\n", start_marker(self.index, self.total));
        let end = format!("\n{}\n", end_marker(self.index, self.total));

        let begin = self.content.find(&start)? + start.len();
        let finish = self.content.rfind(&end)?;
        self.content.get(begin..finish)
    }

    /// The raw slice, taken from the source text this part was split from
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.offset..self.offset + self.length)
    }
}

/// Chunk `text` into parts of at most `max_part_length` characters.
///
/// Empty text, or a part length that could not be determined (`None`), yields
/// no parts rather than an error.
pub fn chunk_text(text: &str, max_part_length: Option<i64>) -> Result<Vec<FilePart>> {
    match max_part_length {
        Some(length) if !text.is_empty() => split_prompt(text, length),
        _ => Ok(Vec::new()),
    }
}

/// Split `text` into wrapped parts of at most `max_part_length` characters.
///
/// Lengths count Unicode scalar values, so a slice never cuts through a
/// multi-byte character. Fails with [`PdfSplitError::InvalidArgument`] when the
/// length is not positive.
pub fn split_prompt(text: &str, max_part_length: i64) -> Result<Vec<FilePart>> {
    if max_part_length <= 0 {
        return Err(PdfSplitError::InvalidArgument(format!(
            "Max length must be greater than 0, got {}",
            max_part_length
        )));
    }

    let max_part_length = usize::try_from(max_part_length).map_err(|_| {
        PdfSplitError::InvalidArgument(format!("Max length {} is too large", max_part_length))
    })?;

    // Byte offset of every part boundary, plus the end of the text
    let mut boundaries: Vec<usize> = text
        .char_indices()
        .step_by(max_part_length)
        .map(|(offset, _)| offset)
        .collect();
    boundaries.push(text.len());

    let num_parts = boundaries.len() - 1;
    let parts: Vec<FilePart> = boundaries
        .windows(2)
        .enumerate()
        .map(|(i, window)| {
            let (start, end) = (window[0], window[1]);
            build_part(&text[start..end], i + 1, num_parts, start)
        })
        .collect();

    log::debug!(
        "Split {} chars into {} parts of at most {}",
        text.chars().count(),
        parts.len(),
        max_part_length
    );

    Ok(parts)
}

fn build_part(slice: &str, index: usize, total: usize, offset: usize) -> FilePart {
    let start = start_marker(index, total);
    let end = end_marker(index, total);

    let content = if index == total {
        format!("{start}\n{slice}\n{end}\n{ALL_PARTS_SENT}")
    } else {
        let ack = format!("\"Part {index}/{total} received\"");
        format!(
            "Do not answer yet. This is just another part of the text I want to send you. \
             Just receive and acknowledge as {ack} and wait for the next part.\n\
             {start}\n{slice}\n{end}\n\
             Remember not answering yet. Just acknowledge you received this part with the \
             message {ack} and wait for the next part."
        )
    };

    FilePart {
        name: part_name(index, total),
        content,
        index,
        total,
        offset,
        length: slice.len(),
    }
}

/// File name for part `index` of `total`
pub fn part_name(index: usize, total: usize) -> String {
    format!("split_{:03}_of_{:03}.txt", index, total)
}

fn start_marker(index: usize, total: usize) -> String {
    format!("[START PART {}/{}]", index, total)
}

fn end_marker(index: usize, total: usize) -> String {
    format!("[END PART {}/{}]", index, total)
}
