//! Pure Apify REST API client.
//!
//! A minimal client for the Apify platform API. Supports starting actor runs,
//! polling for completion, and fetching dataset results. The TikTok video
//! scraper returns items as loosely-typed JSON because its output schema
//! drifts between actor versions.
//!
//! # Example
//!
//! ```rust,ignore
//! use apify_client::ApifyClient;
//!
//! let client = ApifyClient::new("your-api-token".into());
//!
//! let item = client.scrape_tiktok_video("https://www.tiktok.com/@user/video/123").await?;
//! if let Some(item) = item {
//!     println!("{}", item["playCount"]);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{RunData, TikTokVideoInput};

use serde::de::DeserializeOwned;
use serde_json::Value;
use types::ApiResponse;

const BASE_URL: &str = "https://api.apify.com/v2";

/// Actor for clockworks/tiktok-scraper, addressed by `username~name`.
const TIKTOK_SCRAPER: &str = "clockworks~tiktok-scraper";

pub struct ApifyClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Start a TikTok video scrape run. Returns immediately with run metadata.
    pub async fn start_tiktok_video_scrape(&self, urls: &[String]) -> Result<RunData> {
        let input = TikTokVideoInput::metadata_only(urls);

        let url = format!("{}/acts/{}/runs", self.base_url, TIKTOK_SCRAPER);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&input)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;

        let api_resp: ApiResponse<RunData> = resp.json().await?;
        Ok(api_resp.data)
    }

    /// Poll until a run completes. Uses `waitForFinish=60` for efficient long-polling.
    pub async fn wait_for_run(&self, run_id: &str) -> Result<RunData> {
        loop {
            let url = format!(
                "{}/actor-runs/{}?waitForFinish=60",
                self.base_url, run_id
            );
            let resp = self
                .client
                .get(&url)
                .bearer_auth(&self.token)
                .send()
                .await?;
            let resp = ensure_success(resp).await?;

            let api_resp: ApiResponse<RunData> = resp.json().await?;
            let run = api_resp.data;
            if run.is_succeeded() {
                return Ok(run);
            }
            if run.is_failed() {
                return Err(ApifyError::RunFailed {
                    run_id: run.id,
                    status: run.status,
                });
            }
            tracing::debug!(run_id, status = %run.status, "Run still in progress");
        }
    }

    /// Fetch dataset items from a completed run.
    pub async fn get_dataset_items<T: DeserializeOwned>(
        &self,
        dataset_id: &str,
    ) -> Result<Vec<T>> {
        let url = format!(
            "{}/datasets/{}/items?format=json&clean=true",
            self.base_url, dataset_id
        );
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;

        let items: Vec<T> = resp.json().await?;
        Ok(items)
    }

    /// Scrape TikTok videos end-to-end: start run, poll, fetch results.
    ///
    /// Items come back in whatever order the actor produced them.
    pub async fn scrape_tiktok_videos(&self, urls: &[String]) -> Result<Vec<Value>> {
        tracing::info!(count = urls.len(), "Starting TikTok video scrape");

        let run = self.start_tiktok_video_scrape(urls).await?;
        tracing::info!(run_id = %run.id, "Apify run started, polling for completion");

        let completed = self.wait_for_run(&run.id).await?;
        tracing::info!(
            run_id = %completed.id,
            dataset_id = %completed.default_dataset_id,
            "Run completed, fetching results"
        );

        let items: Vec<Value> = self
            .get_dataset_items(&completed.default_dataset_id)
            .await?;
        tracing::info!(count = items.len(), "Fetched TikTok video items");

        Ok(items)
    }

    /// Scrape a single TikTok video. `Ok(None)` when the run produced no item.
    pub async fn scrape_tiktok_video(&self, url: &str) -> Result<Option<Value>> {
        let items = self.scrape_tiktok_videos(&[url.to_string()]).await?;
        match items.into_iter().next() {
            Some(item) => match item_error(&item) {
                Some(message) => Err(ApifyError::Item {
                    url: url.to_string(),
                    message,
                }),
                None => Ok(Some(item)),
            },
            None => Ok(None),
        }
    }
}

async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApifyError::Api {
        status: status.as_u16(),
        message: body,
    })
}

/// Scrapers report per-item failures inside the dataset instead of failing the run.
fn item_error(item: &Value) -> Option<String> {
    ["error", "errorDescription", "errorMessage"]
        .iter()
        .find_map(|key| item.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}
