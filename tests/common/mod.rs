//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use pdfsplit_rs::config::OcrConfig;
use pdfsplit_rs::{OcrBackend, PdfSplitError, ProcessRequest};
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

/// Build a PDF whose pages carry the given text; empty strings give blank pages
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    build_pdf_with_font(
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        },
        pages,
    )
}

/// A well-formed PDF whose text is drawn with an `Identity-H` CID font that
/// has no `ToUnicode` map, so the glyphs cannot be turned back into text
pub fn cid_font_pdf(pages: &[&str]) -> Vec<u8> {
    build_pdf_with_font(
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => "NotoSansCJKjp-Regular",
            "Encoding" => "Identity-H",
        },
        pages,
    )
}

fn build_pdf_with_font(font: Dictionary, pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(font);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            Vec::new()
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// A blank PDF with `count` pages
pub fn blank_pdf(count: usize) -> Vec<u8> {
    build_pdf(&vec![""; count])
}

/// Write `bytes` to `name` inside a fresh temp directory
pub fn write_fixture(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    (dir, path)
}

pub fn ocr_config() -> OcrConfig {
    OcrConfig {
        project_id: "test-project".to_string(),
        location: "us".to_string(),
        processor_id: "test-processor".to_string(),
        ..OcrConfig::default()
    }
}

/// OCR backend that records every request and answers with fixed text
pub struct RecordingBackend {
    reply: Result<String, String>,
    pub requests: Mutex<Vec<ProcessRequest>>,
}

impl RecordingBackend {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl OcrBackend for RecordingBackend {
    async fn process_document(&self, request: ProcessRequest) -> pdfsplit_rs::Result<String> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone().map_err(PdfSplitError::ocr)
    }
}
