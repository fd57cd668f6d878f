//! Mock extractor for testing.
//!
//! Provides a configurable mock implementation of the VideoExtractor trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{ExtractError, ExtractResult};
use crate::traits::extractor::VideoExtractor;
use crate::types::RawMetadata;

/// Canned outcome for one URL.
#[derive(Debug, Clone)]
enum Canned {
    Metadata(RawMetadata),
    Empty,
    Failure(String),
}

/// Mock extractor for testing.
///
/// Allows configuring canned metadata, empty results, and failures per URL.
/// Unknown URLs fail with `ExtractError::NotFound`.
///
/// # Example
///
/// ```rust
/// use video_report::extractors::MockExtractor;
/// use serde_json::json;
///
/// let mock = MockExtractor::new()
///     .with_metadata("https://example.com/v/1", json!({"title": "Hello", "view_count": 10}))
///     .with_failure("https://example.com/v/2", "rate limited");
/// ```
#[derive(Default)]
pub struct MockExtractor {
    /// Canned responses indexed by URL
    responses: Arc<RwLock<HashMap<String, Canned>>>,
    /// Track calls for verification
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockExtractor {
    /// Create a new empty mock extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `metadata` for `url`.
    pub fn add_metadata(&self, url: impl Into<String>, metadata: RawMetadata) {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), Canned::Metadata(metadata));
    }

    /// Return no metadata for `url`.
    pub fn add_empty(&self, url: impl Into<String>) {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), Canned::Empty);
    }

    /// Fail extraction of `url` with `reason`.
    pub fn add_failure(&self, url: impl Into<String>, reason: impl Into<String>) {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), Canned::Failure(reason.into()));
    }

    /// Builder form of [`add_metadata`](Self::add_metadata).
    pub fn with_metadata(self, url: impl Into<String>, metadata: RawMetadata) -> Self {
        self.add_metadata(url, metadata);
        self
    }

    /// Builder form of [`add_empty`](Self::add_empty).
    pub fn with_empty(self, url: impl Into<String>) -> Self {
        self.add_empty(url);
        self
    }

    /// Builder form of [`add_failure`](Self::add_failure).
    pub fn with_failure(self, url: impl Into<String>, reason: impl Into<String>) -> Self {
        self.add_failure(url, reason);
        self
    }

    /// Get the number of times extract was called.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Get the URLs passed to extract, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Get how many times a specific URL was requested.
    pub fn calls_for(&self, url: &str) -> usize {
        self.calls.read().unwrap().iter().filter(|u| *u == url).count()
    }

    /// Clear all recorded calls.
    pub fn reset_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

impl Clone for MockExtractor {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl VideoExtractor for MockExtractor {
    async fn extract(&self, url: &str) -> ExtractResult<Option<RawMetadata>> {
        self.calls.write().unwrap().push(url.to_string());

        let canned = self.responses.read().unwrap().get(url).cloned();
        match canned {
            Some(Canned::Metadata(metadata)) => Ok(Some(metadata)),
            Some(Canned::Empty) => Ok(None),
            Some(Canned::Failure(reason)) => Err(ExtractError::Network(reason)),
            None => Err(ExtractError::NotFound {
                url: url.to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
