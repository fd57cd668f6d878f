//! Plain-text rendering of report pages and KPIs.

use console::{pad_str, truncate_str, Alignment};
use video_report::{format_followers, ReportPage, ReportSummary};

const TITLE_WIDTH: usize = 40;
const NAME_WIDTH: usize = 20;

/// Group digits in threes: 1234567 -> "1,234,567".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Fit `s` into exactly `width` terminal columns, cutting with "…".
///
/// Measures display width, so wide CJK characters and emoji count as two.
fn fit(s: &str, width: usize) -> String {
    let cut = truncate_str(s, width, "…");
    pad_str(&cut, width, Alignment::Left, None).into_owned()
}

pub fn summary_lines(summary: &ReportSummary) -> Vec<String> {
    vec![
        format!("Videos:        {}", group_thousands(summary.videos as u64)),
        format!("Total views:   {}", group_thousands(summary.total_views)),
        format!("Total likes:   {}", group_thousands(summary.total_likes)),
        format!("Total shares:  {}", group_thousands(summary.total_shares)),
        format!("Average views: {}", group_thousands(summary.average_views.round() as u64)),
    ]
}

pub fn page_header(page: &ReportPage<'_>) -> String {
    format!("Page {} of {}", page.index, page.total)
}

pub fn column_header() -> String {
    format!(
        "{}  {}  {:>12}  {:>10}  {:>8}  {:>9}",
        fit("Title", TITLE_WIDTH),
        fit("Creator", NAME_WIDTH),
        "Views",
        "Likes",
        "Shares",
        "Followers",
    )
}

pub fn page_rows(page: &ReportPage<'_>) -> Vec<String> {
    page.records
        .iter()
        .map(|r| {
            format!(
                "{}  {}  {:>12}  {:>10}  {:>8}  {:>9}",
                fit(&r.title, TITLE_WIDTH),
                fit(&format!("@{}", r.username), NAME_WIDTH),
                group_thousands(r.views),
                group_thousands(r.likes),
                group_thousands(r.shares),
                format_followers(r.followers),
            )
        })
        .collect()
}
