//! Apify-based extractor implementation.
//!
//! Uses the Apify TikTok scraper actor to fetch engagement metadata for one
//! video at a time.
//!
//! Requires the `apify` feature to be enabled.

use apify_client::{ApifyClient, ApifyError};
use async_trait::async_trait;

use crate::error::{ExtractError, ExtractResult};
use crate::traits::extractor::VideoExtractor;
use crate::types::RawMetadata;

/// Extractor backed by the Apify TikTok scraper.
///
/// # Example
///
/// ```rust,ignore
/// use video_report::extractors::ApifyExtractor;
///
/// let extractor = ApifyExtractor::from_env()?;
/// let raw = extractor.extract("https://www.tiktok.com/@user/video/123").await?;
/// ```
pub struct ApifyExtractor {
    client: ApifyClient,
}

impl ApifyExtractor {
    /// Create an extractor with the given Apify API token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: ApifyClient::new(token.into()),
        }
    }

    /// Wrap an already-configured client.
    pub fn with_client(client: ApifyClient) -> Self {
        Self { client }
    }

    /// Create from environment variable `APIFY_TOKEN`.
    pub fn from_env() -> ExtractResult<Self> {
        let token = std::env::var("APIFY_TOKEN").map_err(|_| {
            ExtractError::Upstream(Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "APIFY_TOKEN environment variable not set",
            )))
        })?;
        Ok(Self::new(token))
    }
}

#[async_trait]
impl VideoExtractor for ApifyExtractor {
    async fn extract(&self, url: &str) -> ExtractResult<Option<RawMetadata>> {
        self.client
            .scrape_tiktok_video(url)
            .await
            .map_err(|e| map_apify_error(url, e))
    }

    fn name(&self) -> &str {
        "apify-tiktok"
    }
}

fn map_apify_error(url: &str, err: ApifyError) -> ExtractError {
    if err.is_not_found() {
        return ExtractError::NotFound {
            url: url.to_string(),
        };
    }
    match err {
        ApifyError::Network(message) => ExtractError::Network(message),
        ApifyError::Parse(reason) => ExtractError::Malformed {
            url: url.to_string(),
            reason,
        },
        other => ExtractError::Upstream(Box::new(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let url = "https://www.tiktok.com/@a/video/1";

        assert!(matches!(
            map_apify_error(url, ApifyError::Api { status: 404, message: String::new() }),
            ExtractError::NotFound { .. }
        ));
        assert!(matches!(
            map_apify_error(url, ApifyError::Network("reset".into())),
            ExtractError::Network(_)
        ));
        assert!(matches!(
            map_apify_error(url, ApifyError::Parse("eof".into())),
            ExtractError::Malformed { .. }
        ));
        assert!(matches!(
            map_apify_error(
                url,
                ApifyError::RunFailed { run_id: "r".into(), status: "FAILED".into() }
            ),
            ExtractError::Upstream(_)
        ));
    }
}
