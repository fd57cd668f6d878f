//! Testing utilities and fixtures.
//!
//! These are useful for testing applications that use the report library
//! without making real network calls. See also [`MockExtractor`].
//!
//! [`MockExtractor`]: crate::extractors::MockExtractor

use serde_json::{json, Map, Value};

use crate::traits::extractor::ProgressSink;
use crate::types::{RawMetadata, VideoRecord};

/// Builder for yt-dlp style video metadata.
///
/// ```rust
/// use video_report::testing::MetadataBuilder;
///
/// let raw = MetadataBuilder::new("Launch day")
///     .uploader("Campaign Team", "campaign")
///     .views(1500)
///     .followers(2_300_000)
///     .build();
/// assert_eq!(raw["channel_follower_count"], 2_300_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetadataBuilder {
    fields: Map<String, Value>,
}

impl MetadataBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("title".to_string(), Value::String(title.into()));
        Self { fields }
    }

    pub fn uploader(self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.field("uploader", name.into())
            .field("uploader_id", id.into())
    }

    pub fn views(self, n: u64) -> Self {
        self.field("view_count", n)
    }

    pub fn likes(self, n: u64) -> Self {
        self.field("like_count", n)
    }

    pub fn shares(self, n: u64) -> Self {
        self.field("repost_count", n)
    }

    pub fn followers(self, n: u64) -> Self {
        self.field("channel_follower_count", n)
    }

    /// Set an arbitrary top-level field.
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn build(self) -> RawMetadata {
        Value::Object(self.fields)
    }
}

/// An item shaped like the Apify TikTok scraper's dataset output.
pub fn apify_tiktok_item(text: &str, author: &str, plays: u64, fans: u64) -> RawMetadata {
    json!({
        "text": text,
        "playCount": plays,
        "diggCount": plays / 10,
        "shareCount": plays / 100,
        "authorMeta": {
            "name": author,
            "nickName": author.to_uppercase(),
            "fans": fans,
        },
        "webVideoUrl": format!("https://www.tiktok.com/@{author}/video/1"),
    })
}

/// A record with the given title and views, every other field filled in.
pub fn sample_record(title: &str, views: u64) -> VideoRecord {
    VideoRecord {
        title: title.to_string(),
        display_name: "Campaign Team".to_string(),
        username: "campaign".to_string(),
        views,
        likes: views / 10,
        shares: views / 100,
        followers: Some(12_000),
        source_url: format!("https://www.tiktok.com/@campaign/video/{views}"),
    }
}

/// `n` distinct TikTok-style video URLs.
pub fn sample_urls(n: usize) -> Vec<String> {
    (1..=n)
        .map(|i| format!("https://www.tiktok.com/@campaign/video/{i}"))
        .collect()
}

/// Progress sink that records every callback for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingProgress {
    events: Vec<(usize, usize, String)>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(completed, total, url)` callbacks in order.
    pub fn events(&self) -> &[(usize, usize, String)] {
        &self.events
    }

    pub fn count(&self) -> usize {
        self.events.len()
    }

    pub fn urls(&self) -> Vec<&str> {
        self.events.iter().map(|(_, _, url)| url.as_str()).collect()
    }
}

impl ProgressSink for RecordingProgress {
    fn on_progress(&mut self, completed: usize, total: usize, url: &str) {
        self.events.push((completed, total, url.to_string()));
    }
}
