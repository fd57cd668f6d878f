use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub apify_token: String,
    pub page_size: Option<NonZeroUsize>,
    pub request_delay_ms: Option<u64>,
    pub output_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            apify_token: var("APIFY_TOKEN")
                .filter(|t| !t.trim().is_empty())
                .context("APIFY_TOKEN must be set")?,
            page_size: var("REPORT_PAGE_SIZE")
                .map(|v| v.trim().parse())
                .transpose()
                .context("REPORT_PAGE_SIZE must be a positive number")?,
            request_delay_ms: var("REPORT_REQUEST_DELAY_MS")
                .map(|v| v.trim().parse())
                .transpose()
                .context("REPORT_REQUEST_DELAY_MS must be a valid number")?,
            output_dir: var("REPORT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}
