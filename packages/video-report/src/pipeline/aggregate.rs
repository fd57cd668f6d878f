//! Batch aggregation - extract, normalize, and collect one URL at a time.

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::pipeline::normalize::build_record;
use crate::traits::extractor::{ProgressSink, VideoExtractor};
use crate::traits::store::{normalize_url, SessionEntry, SessionStore};
use crate::types::{ReportConfig, ReportTable, VideoRecord};

/// Result of a batch run.
#[derive(Debug, Clone, Default)]
pub struct AggregateOutcome {
    /// Records for every URL that produced metadata, in input order
    pub table: ReportTable,

    /// Number of URLs processed
    pub attempted: usize,

    /// Number of records freshly extracted
    pub fetched: usize,

    /// Number of records reused from the session store
    pub reused: usize,

    /// URLs whose extraction failed
    pub failed_urls: Vec<String>,

    /// URLs where the extractor returned no usable metadata
    pub empty_urls: Vec<String>,
}

impl AggregateOutcome {
    /// Check if every URL produced a record.
    pub fn is_complete(&self) -> bool {
        self.failed_urls.is_empty() && self.empty_urls.is_empty()
    }

    /// Number of URLs dropped from the table.
    pub fn skipped(&self) -> usize {
        self.failed_urls.len() + self.empty_urls.len()
    }
}

/// Run a batch without a session store.
///
/// Calls the extractor exactly once per URL, in order. Failures are logged
/// and skipped; `progress` hears about every URL exactly once.
pub async fn aggregate<E, P>(
    urls: &[String],
    extractor: &E,
    config: &ReportConfig,
    progress: &mut P,
) -> AggregateOutcome
where
    E: VideoExtractor + ?Sized,
    P: ProgressSink + ?Sized,
{
    run(urls, extractor, None, config, progress).await
}

/// Run a batch, reusing records the session store already holds.
///
/// A fresh session entry replaces the extractor call for that URL unless
/// `config.force_refresh` is set or the entry is older than
/// `config.session_ttl`. New records are written back to the store, along
/// with the URL list and the resulting table.
pub async fn aggregate_with_session<E, S, P>(
    urls: &[String],
    extractor: &E,
    session: &S,
    config: &ReportConfig,
    progress: &mut P,
) -> AggregateOutcome
where
    E: VideoExtractor + ?Sized,
    S: SessionStore,
    P: ProgressSink + ?Sized,
{
    run(urls, extractor, Some(session), config, progress).await
}

async fn run<E, P>(
    urls: &[String],
    extractor: &E,
    session: Option<&dyn SessionStore>,
    config: &ReportConfig,
    progress: &mut P,
) -> AggregateOutcome
where
    E: VideoExtractor + ?Sized,
    P: ProgressSink + ?Sized,
{
    let total = urls.len();
    let mut outcome = AggregateOutcome::default();
    let mut extractor_calls = 0usize;

    info!(total, extractor = extractor.name(), "Starting batch");

    for (i, url) in urls.iter().enumerate() {
        outcome.attempted += 1;
        let key = normalize_url(url);

        let cached = match session {
            Some(store) if !config.force_refresh => {
                lookup_session(store, &key, config.session_ttl).await
            }
            _ => None,
        };

        if let Some(record) = cached {
            debug!(url = %url, "Reusing session record");
            outcome.table.push(VideoRecord {
                source_url: url.clone(),
                ..record
            });
            outcome.reused += 1;
        } else {
            if extractor_calls > 0 {
                pause(config.request_delay).await;
            }
            extractor_calls += 1;

            match extractor.extract(url).await {
                Ok(Some(raw)) => match build_record(&raw, url) {
                    Some(record) => {
                        if let Some(store) = session {
                            if let Err(e) = store.put(&key, SessionEntry::new(record.clone())).await {
                                warn!(url = %url, error = %e, "Failed to remember session record");
                            }
                        }
                        debug!(url = %url, views = record.views, "Extracted record");
                        outcome.table.push(record);
                        outcome.fetched += 1;
                    }
                    None => {
                        debug!(url = %url, "Extractor returned empty metadata, skipping URL");
                        outcome.empty_urls.push(url.clone());
                    }
                },
                Ok(None) => {
                    debug!(url = %url, "Extractor returned no metadata, skipping URL");
                    outcome.empty_urls.push(url.clone());
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "Extraction failed, skipping URL");
                    outcome.failed_urls.push(url.clone());
                }
            }
        }

        progress.on_progress(i + 1, total, url);
    }

    if let Some(store) = session {
        if let Err(e) = store.remember_urls(urls).await {
            warn!(error = %e, "Failed to remember URL list");
        }
        if let Err(e) = store.store_last_table(&outcome.table).await {
            warn!(error = %e, "Failed to remember report table");
        }
    }

    info!(
        total,
        records = outcome.table.len(),
        fetched = outcome.fetched,
        reused = outcome.reused,
        failed = outcome.failed_urls.len(),
        empty = outcome.empty_urls.len(),
        "Batch complete"
    );

    outcome
}

async fn lookup_session(
    store: &dyn SessionStore,
    key: &str,
    ttl: Option<Duration>,
) -> Option<VideoRecord> {
    match store.get(key).await {
        Ok(Some(entry)) => match ttl {
            Some(ttl) if entry.is_stale(ttl, Utc::now()) => None,
            _ => Some(entry.record),
        },
        Ok(None) => None,
        Err(e) => {
            warn!(key, error = %e, "Session lookup failed, extracting instead");
            None
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
