//! Pagination - fixed-size, order-preserving views over a report table.

use std::num::NonZeroUsize;

use crate::types::{ReportTable, VideoRecord};

/// One page of a report table. Borrows the table; never copies or mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPage<'a> {
    /// 1-based page number
    pub index: usize,

    /// Total pages in the sequence this page belongs to
    pub total: usize,

    /// Records on this page, in table order
    pub records: &'a [VideoRecord],
}

impl<'a> ReportPage<'a> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.index == self.total
    }

    /// Whether a print page break belongs after this page.
    pub fn needs_break_after(&self) -> bool {
        !self.is_last()
    }
}

/// Split `table` into pages of at most `page_size` records.
///
/// Produces `ceil(len / page_size)` pages numbered from 1; only the last may
/// be shorter. An empty table yields no pages.
pub fn paginate(table: &ReportTable, page_size: NonZeroUsize) -> Vec<ReportPage<'_>> {
    let chunks = table.records().chunks(page_size.get());
    let total = chunks.len();

    chunks
        .enumerate()
        .map(|(i, records)| ReportPage {
            index: i + 1,
            total,
            records,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(n: usize) -> ReportTable {
        ReportTable::from_records(
            (0..n)
                .map(|i| VideoRecord {
                    title: format!("video {i}"),
                    display_name: "d".to_string(),
                    username: "u".to_string(),
                    views: i as u64,
                    likes: 0,
                    shares: 0,
                    followers: None,
                    source_url: format!("https://example.com/v/{i}"),
                })
                .collect(),
        )
    }

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_exact_multiple() {
        let t = table(40);
        let pages = paginate(&t, size(20));
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.len() == 20 && p.total == 2));
    }

    #[test]
    fn test_single_short_page() {
        let t = table(3);
        let pages = paginate(&t, size(20));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].index, 1);
        assert!(pages[0].is_last());
        assert!(!pages[0].needs_break_after());
    }

    #[test]
    fn test_empty_table_has_no_pages() {
        let t = ReportTable::new();
        assert!(paginate(&t, size(20)).is_empty());
    }

    #[test]
    fn test_page_size_one() {
        let t = table(3);
        let pages = paginate(&t, size(1));
        let indices: Vec<_> = pages.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(pages[2].records[0].views, 2);
    }

    #[test]
    fn test_breaks_between_pages_only() {
        let t = table(5);
        let breaks: Vec<_> = paginate(&t, size(2))
            .iter()
            .map(|p| p.needs_break_after())
            .collect();
        assert_eq!(breaks, vec![true, true, false]);
    }
}
