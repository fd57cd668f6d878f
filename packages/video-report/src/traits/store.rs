//! Session storage for records fetched in earlier report runs.
//!
//! A session remembers the most recent URL entries and the last generated
//! table so that regenerating a report does not re-fetch URLs that were
//! already extracted, unless the caller asks for a refresh.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::Result;
use crate::types::{ReportTable, VideoRecord};

/// A record remembered from an earlier extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEntry {
    pub record: VideoRecord,
    pub fetched_at: DateTime<Utc>,
}

impl SessionEntry {
    /// Create an entry stamped with the current time.
    pub fn new(record: VideoRecord) -> Self {
        Self {
            record,
            fetched_at: Utc::now(),
        }
    }

    /// Set the fetch timestamp.
    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = fetched_at;
        self
    }

    /// Check if the entry is older than `ttl` at `now`.
    pub fn is_stale(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        match chrono::Duration::from_std(ttl) {
            Ok(ttl) => now - self.fetched_at > ttl,
            // A TTL too large to represent never expires
            Err(_) => false,
        }
    }
}

/// Store consulted by the aggregator before calling the extractor.
///
/// Keys are normalized URLs (see [`normalize_url`]).
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Get the remembered entry for a key.
    async fn get(&self, key: &str) -> Result<Option<SessionEntry>>;

    /// Remember an entry under a key.
    async fn put(&self, key: &str, entry: SessionEntry) -> Result<()>;

    /// Remember the URL list of the latest run, as the caller entered it.
    async fn remember_urls(&self, urls: &[String]) -> Result<()>;

    /// URL list of the latest run.
    async fn recent_urls(&self) -> Result<Vec<String>>;

    /// Remember the table of the latest run.
    async fn store_last_table(&self, table: &ReportTable) -> Result<()>;

    /// Table of the latest run, if any.
    async fn last_table(&self) -> Result<Option<ReportTable>>;

    /// Forget everything.
    async fn clear(&self) -> Result<()>;
}

/// Query parameters that only track how a link was shared.
const TRACKING_PARAMS: &[&str] = &[
    "_r",
    "_t",
    "feature",
    "is_copy_url",
    "is_from_webapp",
    "sender_device",
    "si",
    "tt_from",
    "u_code",
    "web_id",
];

/// Query parameter prefixes that only track how a link was shared.
const TRACKING_PREFIXES: &[&str] = &["utm_", "share"];

fn is_tracking_param(key: &str) -> bool {
    TRACKING_PARAMS.contains(&key) || TRACKING_PREFIXES.iter().any(|p| key.starts_with(p))
}

/// Normalize a URL into a session key.
///
/// Drops the fragment, tracking query parameters and a trailing slash so
/// that share links map to the same video. Remaining query parameters are
/// kept, sorted, since some platforms identify the video there
/// (`watch?v=...`). Input that does not parse as a URL is only trimmed.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    match url::Url::parse(trimmed) {
        Ok(mut url) => {
            let mut params: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(k, _)| !is_tracking_param(k))
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            params.sort();

            url.set_fragment(None);
            url.set_query(None);
            let mut key = url.to_string();
            while key.ends_with('/') && !key.ends_with("://") {
                key.pop();
            }

            if !params.is_empty() {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(&params)
                    .finish();
                key.push('?');
                key.push_str(&query);
            }
            key
        }
        Err(_) => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> VideoRecord {
        VideoRecord {
            title: "t".to_string(),
            display_name: "d".to_string(),
            username: "u".to_string(),
            views: 0,
            likes: 0,
            shares: 0,
            followers: None,
            source_url: "https://example.com/v/1".to_string(),
        }
    }

    #[test]
    fn test_normalize_url_strips_tracking_and_fragment() {
        assert_eq!(
            normalize_url("  https://www.tiktok.com/@user/video/123?is_from_webapp=1#top "),
            "https://www.tiktok.com/@user/video/123"
        );
    }

    #[test]
    fn test_normalize_url_keeps_identifying_query() {
        assert_eq!(
            normalize_url("https://www.youtube.com/watch?v=AAA&utm_source=x"),
            "https://www.youtube.com/watch?v=AAA"
        );
        assert_ne!(
            normalize_url("https://www.youtube.com/watch?v=AAA"),
            normalize_url("https://www.youtube.com/watch?v=BBB")
        );
    }

    #[test]
    fn test_normalize_url_sorts_query() {
        assert_eq!(
            normalize_url("https://example.com/v?b=2&a=1&share_id=9"),
            normalize_url("https://example.com/v/?a=1&b=2")
        );
    }

    #[test]
    fn test_normalize_url_strips_trailing_slash() {
        assert_eq!(
            normalize_url("https://www.tiktok.com/@user/video/123/"),
            "https://www.tiktok.com/@user/video/123"
        );
        assert_eq!(normalize_url("https://example.com/"), "https://example.com");
    }

    #[test]
    fn test_normalize_url_lowercases_host() {
        assert_eq!(
            normalize_url("https://WWW.TikTok.com/@User/video/1"),
            "https://www.tiktok.com/@User/video/1"
        );
    }

    #[test]
    fn test_normalize_unparsable_is_trimmed() {
        assert_eq!(normalize_url("  not a url "), "not a url");
    }

    #[test]
    fn test_entry_staleness() {
        let now = Utc::now();
        let entry = SessionEntry::new(record()).with_fetched_at(now - chrono::Duration::seconds(120));

        assert!(entry.is_stale(Duration::from_secs(60), now));
        assert!(!entry.is_stale(Duration::from_secs(600), now));
    }
}
