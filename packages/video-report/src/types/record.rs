//! Canonical video records and the report table built from them.

use serde::{Deserialize, Serialize};

/// Untyped metadata returned by an extractor for one URL.
///
/// Shape varies per platform and extractor version. Expected to be a JSON
/// object; anything else normalizes to no record.
pub type RawMetadata = serde_json::Value;

/// Normalized, fixed-schema representation of one video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Video title ("No Title" when the source has none)
    pub title: String,

    /// Human-readable uploader name
    pub display_name: String,

    /// Stable uploader handle
    pub username: String,

    pub views: u64,
    pub likes: u64,
    pub shares: u64,

    /// Uploader follower count. `None` means unknown, never zero.
    pub followers: Option<u64>,

    /// The URL exactly as the caller supplied it
    pub source_url: String,
}

impl VideoRecord {
    /// Check whether the follower count could not be resolved.
    pub fn followers_missing(&self) -> bool {
        self.followers.is_none()
    }
}

/// Ordered records from one batch run, in input URL order with failures skipped.
///
/// Only the batch aggregator appends to a table; everything downstream
/// reads it through shared references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    records: Vec<VideoRecord>,
}

impl ReportTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from already-normalized records, keeping their order.
    pub fn from_records(records: Vec<VideoRecord>) -> Self {
        Self { records }
    }

    pub(crate) fn push(&mut self, record: VideoRecord) {
        self.records.push(record);
    }

    /// All records in table order.
    pub fn records(&self) -> &[VideoRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VideoRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose follower count is unknown.
    pub fn missing_followers(&self) -> usize {
        self.records.iter().filter(|r| r.followers_missing()).count()
    }

    /// Consume the table, returning its records.
    pub fn into_records(self) -> Vec<VideoRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a ReportTable {
    type Item = &'a VideoRecord;
    type IntoIter = std::slice::Iter<'a, VideoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, followers: Option<u64>) -> VideoRecord {
        VideoRecord {
            title: "t".to_string(),
            display_name: "d".to_string(),
            username: "u".to_string(),
            views: 1,
            likes: 2,
            shares: 3,
            followers,
            source_url: url.to_string(),
        }
    }

    #[test]
    fn test_table_preserves_insertion_order() {
        let mut table = ReportTable::new();
        table.push(record("https://a", None));
        table.push(record("https://b", Some(10)));

        let urls: Vec<_> = table.iter().map(|r| r.source_url.as_str()).collect();
        assert_eq!(urls, vec!["https://a", "https://b"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_missing_followers_count() {
        let table = ReportTable::from_records(vec![
            record("https://a", None),
            record("https://b", Some(10)),
            record("https://c", None),
        ]);
        assert_eq!(table.missing_followers(), 2);
    }
}
