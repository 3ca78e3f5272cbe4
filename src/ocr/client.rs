//! Google Document AI REST client

use super::OcrBackend;
use super::request::{ProcessRequest, ProcessResponse};
use crate::config::OcrConfig;
use crate::error::{PdfSplitError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const API_VERSION: &str = "v1";

/// Client for the Document AI `processors:process` endpoint
#[derive(Debug, Clone)]
pub struct DocumentAiClient {
    client: Client,
    endpoint: String,
    access_token: Option<String>,
}

impl DocumentAiClient {
    /// Create a client from OCR settings
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PdfSplitError::ocr_with_source("failed to build HTTP client", e))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            access_token: config.access_token.clone(),
        })
    }

    fn process_url(&self, name: &str) -> String {
        format!("{}/{}/{}:process", self.endpoint, API_VERSION, name)
    }
}

#[async_trait]
impl OcrBackend for DocumentAiClient {
    async fn process_document(&self, request: ProcessRequest) -> Result<String> {
        let url = self.process_url(&request.name);
        log::debug!(
            "POST {} ({} base64 bytes)",
            url,
            request.raw_document.content.len()
        );

        let mut builder = self.client.post(&url).json(&request);
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PdfSplitError::ocr(format!(
                "Document AI returned {} for {}: {}",
                status, request.name, body
            )));
        }

        let body = response.text().await?;
        let parsed: ProcessResponse = serde_json::from_str(&body).map_err(|e| {
            PdfSplitError::ocr_with_source("malformed Document AI response", e)
        })?;

        Ok(parsed.document.text)
    }
}
