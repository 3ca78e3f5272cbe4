//! Document AI process request and response bodies

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

/// MIME type sent with every upload
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A single `processDocument` request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    /// Processor resource name, sent in the URL path rather than the body
    #[serde(skip)]
    pub name: String,

    pub raw_document: RawDocument,
}

/// Inline document payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    /// Base64 of the document bytes
    pub content: String,

    pub mime_type: String,
}

impl ProcessRequest {
    /// Build a request uploading `bytes` as a PDF to the named processor
    pub fn pdf(name: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            name: name.into(),
            raw_document: RawDocument {
                content: general_purpose::STANDARD.encode(bytes),
                mime_type: PDF_MIME_TYPE.to_string(),
            },
        }
    }
}

/// Response of `processDocument`; only the text is read
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessResponse {
    pub document: ProcessedDocument,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessedDocument {
    /// Empty strings are omitted on the wire
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_request_body() {
        let request = ProcessRequest::pdf("projects/p/locations/us/processors/x", b"%PDF-1.5");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "rawDocument": {
                    "content": "JVBERi0xLjU=",
                    "mimeType": "application/pdf"
                }
            })
        );
        assert_eq!(request.name, "projects/p/locations/us/processors/x");
    }

    #[test]
    fn test_response_parsing() {
        let response: ProcessResponse =
            serde_json::from_str(r#"{"document": {"text": "Scanned words", "pages": []}}"#).unwrap();
        assert_eq!(response.document.text, "Scanned words");

        let empty: ProcessResponse = serde_json::from_str(r#"{"document": {}}"#).unwrap();
        assert_eq!(empty.document.text, "");

        assert!(serde_json::from_str::<ProcessResponse>(r#"{"error": "nope"}"#).is_err());
    }
}
