//! Typed errors for the video report library.
//!
//! Uses `thiserror` for library errors (not `anyhow`). Most failures in
//! this crate are recovered locally and never reach the caller: a failed
//! extraction drops one URL, a failed spreadsheet writer degrades to CSV.

use thiserror::Error;

/// Errors surfaced by session storage.
///
/// Extraction and export failures are recovered inside the pipeline and
/// never reach this type.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Session store operation failed
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors an extraction collaborator may signal for a single URL.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The platform has no video at this URL
    #[error("video not found: {url}")]
    NotFound { url: String },

    /// Transport failure talking to the extractor
    #[error("network error: {0}")]
    Network(String),

    /// The extractor answered with something we can't read
    #[error("malformed response for {url}: {reason}")]
    Malformed { url: String, reason: String },

    /// The upstream service rejected or aborted the request
    #[error("upstream error: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised while serializing a report table.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Spreadsheet writer failed
    #[cfg(feature = "xlsx")]
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// CSV writer failed
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Buffer flush failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for session store operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Result type alias for extraction collaborators.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Result type alias for export operations.
pub type ExportResult<T> = std::result::Result<T, ExportError>;
