//! Headline KPIs for a finished report.

use serde::{Deserialize, Serialize};

use crate::types::ReportTable;

/// Campaign totals shown above the paginated report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub videos: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_shares: u64,

    /// Mean views per video, zero for an empty table
    pub average_views: f64,

    /// Records whose follower count could not be resolved
    pub missing_followers: usize,
}

impl ReportSummary {
    pub fn from_table(table: &ReportTable) -> Self {
        let mut summary = Self {
            videos: table.len(),
            ..Self::default()
        };

        for record in table {
            summary.total_views = summary.total_views.saturating_add(record.views);
            summary.total_likes = summary.total_likes.saturating_add(record.likes);
            summary.total_shares = summary.total_shares.saturating_add(record.shares);
            if record.followers_missing() {
                summary.missing_followers += 1;
            }
        }

        if summary.videos > 0 {
            summary.average_views = summary.total_views as f64 / summary.videos as f64;
        }

        summary
    }

    pub fn is_empty(&self) -> bool {
        self.videos == 0
    }
}
