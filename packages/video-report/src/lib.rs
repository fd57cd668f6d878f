//! Campaign Video Report Library
//!
//! Turns a list of short-form video URLs into a clean engagement report:
//! one normalized record per video, paged for display, exportable as a
//! spreadsheet (or CSV when no spreadsheet writer is available).
//!
//! # Design Philosophy
//!
//! - Extraction is somebody else's problem: the library takes a [`VideoExtractor`]
//! - One bad URL never sinks the batch
//! - Absent data stays absent (`followers: None`, never a fake zero)
//! - Library handles mechanics, app handles presentation and I/O
//!
//! # Usage
//!
//! ```rust,ignore
//! use video_report::{aggregate, paginate, ExportResolver, ReportConfig};
//! use video_report::extractors::ApifyExtractor;
//!
//! let extractor = ApifyExtractor::from_env()?;
//! let config = ReportConfig::default();
//!
//! let outcome = aggregate(&urls, &extractor, &config, &mut |done: usize, total: usize, _: &str| {
//!     println!("{done}/{total}");
//! })
//! .await;
//!
//! for page in paginate(&outcome.table, config.page_size) {
//!     // render page.records
//! }
//!
//! let artifact = ExportResolver::new(config.export.clone()).export(&outcome.table)?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator seams (VideoExtractor, ProgressSink, SessionStore, SpreadsheetWriter)
//! - [`types`] - Records, tables, config, and export artifacts
//! - [`pipeline`] - Normalize, aggregate, paginate, export, summarize
//! - [`stores`] - Session store implementations (MemorySessionStore)
//! - [`extractors`] - Extractor implementations (ApifyExtractor, MockExtractor)
//! - [`testing`] - Fixtures for tests

pub mod error;
pub mod extractors;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExportError, ExtractError, ReportError, Result};
pub use traits::{
    extractor::{NoProgress, ProgressSink, VideoExtractor},
    store::{normalize_url, SessionEntry, SessionStore},
    writer::SpreadsheetWriter,
};
pub use types::{
    Cell, ExportArtifact, ExportConfig, ExportKind, RawMetadata, ReportConfig, ReportTable, Sheet,
    VideoRecord, DEFAULT_BASE_FILENAME, DEFAULT_PAGE_SIZE, EXPORT_HEADERS,
};

// Re-export pipeline components
pub use pipeline::{
    aggregate, aggregate_with_session, build_record, coerce_int, format_followers, paginate,
    resolve_followers, write_csv, AggregateOutcome, ExportResolver, ReportPage, ReportSummary,
};

#[cfg(feature = "xlsx")]
pub use pipeline::XlsxWriter;

// Re-export stores
pub use stores::MemorySessionStore;

// Re-export extractors
pub use extractors::MockExtractor;

#[cfg(feature = "apify")]
pub use extractors::ApifyExtractor;
