//! Extraction collaborator and progress reporting seams.
//!
//! The pipeline never talks to a platform directly. It hands each URL to a
//! [`VideoExtractor`] and reports progress through a [`ProgressSink`];
//! applications decide what sits behind both.
//!
//! # Usage
//!
//! ```rust,ignore
//! use video_report::traits::extractor::VideoExtractor;
//!
//! match extractor.extract("https://www.tiktok.com/@user/video/1").await {
//!     Ok(Some(raw)) => { /* normalize */ }
//!     Ok(None) => { /* nothing to report */ }
//!     Err(e) => { /* skip this URL */ }
//! }
//! ```

use async_trait::async_trait;

use crate::error::ExtractResult;
use crate::types::RawMetadata;

/// Fetches raw engagement metadata for a single video URL.
///
/// Implementations:
/// - `ApifyExtractor` - Apify TikTok scraper (requires `apify` feature)
/// - `MockExtractor` - For testing
///
/// The aggregator calls `extract` at most once per URL per run. Retries,
/// rate limiting and timeouts belong to the implementation.
#[async_trait]
pub trait VideoExtractor: Send + Sync {
    /// Extract metadata for one URL.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(raw))` - metadata found (possibly partial)
    /// - `Ok(None)` - the extractor ran but found nothing
    /// - `Err(_)` - the extraction failed
    async fn extract(&self, url: &str) -> ExtractResult<Option<RawMetadata>>;

    /// Get the extractor name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Receives `(completed, total, current_url)` after each URL in a batch.
pub trait ProgressSink {
    fn on_progress(&mut self, completed: usize, total: usize, url: &str);
}

impl<F> ProgressSink for F
where
    F: FnMut(usize, usize, &str),
{
    fn on_progress(&mut self, completed: usize, total: usize, url: &str) {
        self(completed, total, url)
    }
}

/// Progress sink that discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&mut self, _completed: usize, _total: usize, _url: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_progress_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |done: usize, total: usize, url: &str| {
                seen.push((done, total, url.to_string()));
            };
            sink.on_progress(1, 2, "https://a");
            sink.on_progress(2, 2, "https://b");
        }
        assert_eq!(
            seen,
            vec![
                (1, 2, "https://a".to_string()),
                (2, 2, "https://b".to_string()),
            ]
        );
    }
}
