//! Spreadsheet serializer seam used by the export resolver.

use crate::error::ExportResult;
use crate::types::sheet::Sheet;

/// Serializes a sheet into a structured spreadsheet format.
///
/// The export resolver treats any error from `write` as "serializer
/// unavailable" and falls back to CSV.
pub trait SpreadsheetWriter: Send + Sync {
    /// Serialize `sheet` into file bytes.
    fn write(&self, sheet: &Sheet) -> ExportResult<Vec<u8>>;

    /// File extension without the dot (e.g. "xlsx").
    fn extension(&self) -> &'static str;

    fn mime_type(&self) -> &'static str;

    /// Get the writer name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
