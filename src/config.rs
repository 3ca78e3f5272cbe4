//! Configuration for pdfsplit-rs
//!
//! Settings for the chunker and for the remote Document AI processor. Values
//! come from defaults, a JSON file, or the process environment.

use crate::error::{PdfSplitError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default maximum part length in characters
pub const DEFAULT_MAX_PART_LENGTH: usize = 10_000;

/// Default OCR page ceiling
pub const DEFAULT_MAX_OCR_PAGES: usize = 15;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub splitter: SplitterConfig,

    #[serde(default)]
    pub ocr: OcrConfig,
}

/// Chunker settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Maximum characters of source text per part
    pub max_part_length: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            max_part_length: DEFAULT_MAX_PART_LENGTH,
        }
    }
}

/// Remote OCR processor settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Google Cloud project identifier
    pub project_id: String,

    /// Processor location, e.g. `us` or `eu`
    pub location: String,

    /// Document AI processor identifier
    pub processor_id: String,

    /// Documents with more pages than this are rejected before upload
    pub max_pages: usize,

    /// Override for the service endpoint (scheme and host only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// OAuth access token sent as a bearer credential
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,

    /// HTTP timeout for the process call
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            location: "us".to_string(),
            processor_id: String::new(),
            max_pages: DEFAULT_MAX_OCR_PAGES,
            endpoint: None,
            access_token: None,
            timeout_secs: 120,
        }
    }
}

impl OcrConfig {
    /// Full processor resource name
    pub fn processor_name(&self) -> String {
        format!(
            "projects/{}/locations/{}/processors/{}",
            self.project_id, self.location, self.processor_id
        )
    }

    /// Service endpoint, regional unless overridden
    pub fn endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}-documentai.googleapis.com", self.location),
        }
    }

    /// Check that the processor triple is usable
    pub fn validate(&self) -> Result<()> {
        if self.max_pages == 0 {
            return Err(PdfSplitError::Config("max_pages must be greater than 0".to_string()));
        }

        for (field, value) in [
            ("project_id", &self.project_id),
            ("location", &self.location),
            ("processor_id", &self.processor_id),
        ] {
            if value.trim().is_empty() {
                return Err(PdfSplitError::Config(format!("ocr.{} is not set", field)));
            }
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PdfSplitError::io(path, e))?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Build configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(project_id) = lookup("GCLOUD_PROJECT_ID") {
            config.ocr.project_id = project_id;
        }
        if let Some(location) = lookup("GCLOUD_LOCATION") {
            config.ocr.location = location;
        }
        if let Some(processor_id) = lookup("GCLOUD_PROCESSOR_ID") {
            config.ocr.processor_id = processor_id;
        }
        config.ocr.access_token = lookup("GCLOUD_ACCESS_TOKEN").filter(|t| !t.is_empty());
        config.ocr.endpoint = lookup("DOCUMENTAI_ENDPOINT").filter(|e| !e.is_empty());

        if let Some(max_pages) = lookup("PDFSPLIT_MAX_PAGES") {
            config.ocr.max_pages = parse_number("PDFSPLIT_MAX_PAGES", &max_pages)?;
        }
        if let Some(length) = lookup("PDFSPLIT_MAX_PART_LENGTH") {
            config.splitter.max_part_length = parse_number("PDFSPLIT_MAX_PART_LENGTH", &length)?;
        }

        Ok(config)
    }

    /// Validate settings that do not depend on whether OCR is reached
    pub fn validate(&self) -> Result<()> {
        if self.splitter.max_part_length == 0 {
            return Err(PdfSplitError::Config(
                "max_part_length must be greater than 0".to_string(),
            ));
        }
        if self.ocr.max_pages == 0 {
            return Err(PdfSplitError::Config("max_pages must be greater than 0".to_string()));
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|e| PdfSplitError::Config(format!("{} must be a number: {}", key, e)))
}
