use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for the clockworks/tiktok-scraper actor when scraping specific videos.
#[derive(Debug, Clone, Serialize)]
pub struct TikTokVideoInput {
    #[serde(rename = "postURLs")]
    pub post_urls: Vec<String>,
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
    #[serde(rename = "shouldDownloadVideos")]
    pub should_download_videos: bool,
    #[serde(rename = "shouldDownloadCovers")]
    pub should_download_covers: bool,
}

impl TikTokVideoInput {
    /// Metadata-only scrape of the given video URLs.
    pub fn metadata_only(urls: &[String]) -> Self {
        Self {
            post_urls: urls.to_vec(),
            results_per_page: urls.len().max(1) as u32,
            should_download_videos: false,
            should_download_covers: false,
        }
    }
}

/// Wrapper for Apify API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Apify actor run metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RunData {
    pub id: String,
    pub status: String,
    #[serde(rename = "defaultDatasetId")]
    pub default_dataset_id: String,
    #[serde(rename = "startedAt")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunData {
    /// Terminal failure statuses reported by Apify.
    pub fn is_failed(&self) -> bool {
        matches!(self.status.as_str(), "FAILED" | "ABORTED" | "TIMED-OUT")
    }

    pub fn is_succeeded(&self) -> bool {
        self.status == "SUCCEEDED"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_input_serializes_actor_field_names() {
        let input = TikTokVideoInput::metadata_only(&[
            "https://www.tiktok.com/@a/video/1".to_string(),
        ]);
        let json = serde_json::to_value(&input).unwrap();

        assert_eq!(json["postURLs"][0], "https://www.tiktok.com/@a/video/1");
        assert_eq!(json["resultsPerPage"], 1);
        assert_eq!(json["shouldDownloadVideos"], false);
    }

    #[test]
    fn run_status_helpers() {
        let run: RunData = serde_json::from_str(
            r#"{"id":"r1","status":"TIMED-OUT","defaultDatasetId":"d1"}"#,
        )
        .unwrap();
        assert!(run.is_failed());
        assert!(!run.is_succeeded());
    }
}
