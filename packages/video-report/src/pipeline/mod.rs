//! Report pipeline.
//!
//! The pipeline runs in stages:
//! - Normalize raw extractor metadata into fixed records
//! - Aggregate a URL batch into a report table
//! - Paginate the table for display
//! - Export the table as a spreadsheet, or CSV when that fails
//! - Summarize campaign totals

pub mod aggregate;
pub mod export;
pub mod normalize;
pub mod paginate;
pub mod summary;

pub use aggregate::{aggregate, aggregate_with_session, AggregateOutcome};
pub use export::{write_csv, ExportResolver, CSV_MIME_TYPE, UTF8_BOM, XLSX_MIME_TYPE};
#[cfg(feature = "xlsx")]
pub use export::XlsxWriter;
pub use normalize::{
    build_record, coerce_int, format_followers, resolve_followers, DEFAULT_TITLE, FOLLOWER_PATHS,
    UNKNOWN,
};
pub use paginate::{paginate, ReportPage};
pub use summary::ReportSummary;
