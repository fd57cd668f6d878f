//! Export resolution - serialize a report table, degrading to CSV.
//!
//! The resolver prefers a structured spreadsheet. When no spreadsheet
//! writer is available (the `xlsx` feature is off) or the writer fails,
//! it produces UTF-8 CSV with a byte-order mark so that spreadsheet tools
//! detect the encoding and keep non-Latin text readable.

use tracing::{debug, warn};

use crate::error::{ExportError, ExportResult};
use crate::traits::writer::SpreadsheetWriter;
use crate::types::{ExportArtifact, ExportConfig, ExportKind, ReportTable, Sheet};

/// UTF-8 byte-order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub const CSV_MIME_TYPE: &str = "text/csv";

pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Serializes full report tables into downloadable artifacts.
///
/// # Example
///
/// ```rust
/// use video_report::{ExportConfig, ExportKind, ExportResolver, ReportTable};
///
/// let resolver = ExportResolver::without_primary(ExportConfig::default());
/// let artifact = resolver.export(&ReportTable::new()).unwrap();
/// assert_eq!(artifact.kind, ExportKind::Fallback);
/// assert_eq!(artifact.filename, "tiktok_campaign_report.csv");
/// ```
pub struct ExportResolver {
    primary: Option<Box<dyn SpreadsheetWriter>>,
    config: ExportConfig,
}

impl Default for ExportResolver {
    fn default() -> Self {
        Self::new(ExportConfig::default())
    }
}

impl ExportResolver {
    /// Create a resolver using the spreadsheet writer compiled into this build, if any.
    pub fn new(config: ExportConfig) -> Self {
        Self {
            primary: default_primary(),
            config,
        }
    }

    /// Create a resolver with a specific spreadsheet writer.
    pub fn with_primary(config: ExportConfig, writer: Box<dyn SpreadsheetWriter>) -> Self {
        Self {
            primary: Some(writer),
            config,
        }
    }

    /// Create a resolver that always produces the CSV fallback.
    pub fn without_primary(config: ExportConfig) -> Self {
        Self {
            primary: None,
            config,
        }
    }

    /// Check if a spreadsheet writer is configured.
    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Serialize the full table.
    ///
    /// Never mutates `table`. A failing spreadsheet writer is logged and
    /// replaced by CSV; the returned error only covers the CSV path itself.
    pub fn export(&self, table: &ReportTable) -> ExportResult<ExportArtifact> {
        let sheet = Sheet::from_table(table, self.config.sheet_name.clone());

        if let Some(writer) = &self.primary {
            match writer.write(&sheet) {
                Ok(bytes) => {
                    debug!(
                        writer = writer.name(),
                        rows = sheet.row_count(),
                        bytes = bytes.len(),
                        "Exported report"
                    );
                    return Ok(ExportArtifact {
                        kind: ExportKind::Primary,
                        bytes,
                        filename: format!(
                            "{}.{}",
                            self.config.base_filename,
                            writer.extension()
                        ),
                        mime_type: writer.mime_type().to_string(),
                    });
                }
                Err(e) => {
                    warn!(writer = writer.name(), error = %e, "Spreadsheet export failed, falling back to CSV");
                }
            }
        } else {
            debug!("No spreadsheet writer available, exporting CSV");
        }

        Ok(ExportArtifact {
            kind: ExportKind::Fallback,
            bytes: write_csv(&sheet)?,
            filename: format!("{}.csv", self.config.base_filename),
            mime_type: CSV_MIME_TYPE.to_string(),
        })
    }
}

/// Write a sheet as CSV, prefixed with a UTF-8 byte-order mark.
pub fn write_csv(sheet: &Sheet) -> ExportResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(UTF8_BOM.len() + 64 * (sheet.row_count() + 1));
    buf.extend_from_slice(UTF8_BOM);

    let mut writer = csv::Writer::from_writer(buf);
    writer.write_record(&sheet.headers)?;
    for row in &sheet.rows {
        writer.write_record(row.iter().map(|cell| cell.to_text()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

#[cfg(feature = "xlsx")]
fn default_primary() -> Option<Box<dyn SpreadsheetWriter>> {
    Some(Box::new(XlsxWriter))
}

#[cfg(not(feature = "xlsx"))]
fn default_primary() -> Option<Box<dyn SpreadsheetWriter>> {
    None
}

/// Excel (.xlsx) writer. Requires the `xlsx` feature.
#[cfg(feature = "xlsx")]
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxWriter;

#[cfg(feature = "xlsx")]
impl SpreadsheetWriter for XlsxWriter {
    fn write(&self, sheet: &Sheet) -> ExportResult<Vec<u8>> {
        use crate::types::Cell;
        use rust_xlsxwriter::{Format, Workbook};

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        let bold = Format::new().set_bold();
        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
        }

        for (i, row) in sheet.rows.iter().enumerate() {
            let r = (i + 1) as u32;
            for (col, cell) in row.iter().enumerate() {
                let c = col as u16;
                match cell {
                    Cell::Text(s) => {
                        worksheet.write_string(r, c, s)?;
                    }
                    Cell::Int(n) => {
                        worksheet.write_number(r, c, *n as f64)?;
                    }
                    Cell::Empty => {}
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn mime_type(&self) -> &'static str {
        XLSX_MIME_TYPE
    }

    fn name(&self) -> &str {
        "xlsx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VideoRecord;

    struct BrokenWriter;

    impl SpreadsheetWriter for BrokenWriter {
        fn write(&self, _sheet: &Sheet) -> ExportResult<Vec<u8>> {
            Err(ExportError::Io(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "no spreadsheet engine",
            )))
        }

        fn extension(&self) -> &'static str {
            "xlsx"
        }

        fn mime_type(&self) -> &'static str {
            XLSX_MIME_TYPE
        }
    }

    struct FakeWriter;

    impl SpreadsheetWriter for FakeWriter {
        fn write(&self, sheet: &Sheet) -> ExportResult<Vec<u8>> {
            Ok(format!("{} rows", sheet.row_count()).into_bytes())
        }

        fn extension(&self) -> &'static str {
            "fake"
        }

        fn mime_type(&self) -> &'static str {
            "application/x-fake"
        }
    }

    fn table() -> ReportTable {
        ReportTable::from_records(vec![VideoRecord {
            title: "Hello, \"world\"".to_string(),
            display_name: "Name".to_string(),
            username: "user".to_string(),
            views: 1500,
            likes: 20,
            shares: 3,
            followers: Some(2_300_000),
            source_url: "https://www.tiktok.com/@user/video/1".to_string(),
        }])
    }

    #[test]
    fn test_primary_writer_used_when_available() {
        let resolver = ExportResolver::with_primary(ExportConfig::default(), Box::new(FakeWriter));
        let artifact = resolver.export(&table()).unwrap();

        assert_eq!(artifact.kind, ExportKind::Primary);
        assert_eq!(artifact.bytes, b"1 rows");
        assert_eq!(artifact.filename, "tiktok_campaign_report.fake");
        assert_eq!(artifact.mime_type, "application/x-fake");
    }

    #[test]
    fn test_failing_writer_falls_back() {
        let resolver =
            ExportResolver::with_primary(ExportConfig::default(), Box::new(BrokenWriter));
        let artifact = resolver.export(&table()).unwrap();

        assert_eq!(artifact.kind, ExportKind::Fallback);
        assert_eq!(artifact.mime_type, CSV_MIME_TYPE);
        assert!(artifact.bytes.starts_with(UTF8_BOM));
    }

    #[test]
    fn test_csv_quotes_and_formatted_followers() {
        let resolver = ExportResolver::without_primary(ExportConfig::default());
        let artifact = resolver.export(&table()).unwrap();
        let text = std::str::from_utf8(&artifact.bytes[UTF8_BOM.len()..]).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Title,Display Name,Username,Views,Likes,Shares,Followers,Link,Followers (Formatted)")
        );
        assert_eq!(
            lines.next(),
            Some("\"Hello, \"\"world\"\"\",Name,user,1500,20,3,2300000,https://www.tiktok.com/@user/video/1,2.3M")
        );
    }

    #[test]
    fn test_custom_base_filename() {
        let config = ExportConfig::default().with_base_filename("ramadan_campaign");
        let artifact = ExportResolver::without_primary(config)
            .export(&ReportTable::new())
            .unwrap();
        assert_eq!(artifact.filename, "ramadan_campaign.csv");
    }

    #[cfg(feature = "xlsx")]
    #[test]
    fn test_xlsx_writer_produces_zip_container() {
        let artifact = ExportResolver::default().export(&table()).unwrap();

        assert_eq!(artifact.kind, ExportKind::Primary);
        assert_eq!(artifact.filename, "tiktok_campaign_report.xlsx");
        assert_eq!(artifact.mime_type, XLSX_MIME_TYPE);
        assert!(artifact.bytes.starts_with(b"PK"));
    }

    #[cfg(feature = "xlsx")]
    #[test]
    fn test_empty_table_exports_header_only_workbook() {
        let artifact = ExportResolver::default().export(&ReportTable::new()).unwrap();

        assert_eq!(artifact.kind, ExportKind::Primary);
        assert!(!artifact.is_empty());
        assert!(artifact.bytes.starts_with(b"PK"));
    }

    #[cfg(feature = "xlsx")]
    #[test]
    fn test_invalid_sheet_name_falls_back() {
        let config = ExportConfig::default().with_sheet_name("bad/name[]");
        let artifact = ExportResolver::new(config).export(&table()).unwrap();
        assert_eq!(artifact.kind, ExportKind::Fallback);
    }
}
