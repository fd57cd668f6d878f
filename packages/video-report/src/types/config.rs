//! Configuration types for report generation and export.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Default number of records per rendered page.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(n) => n,
    None => panic!("page size must be non-zero"),
};

/// Default base name for exported files.
pub const DEFAULT_BASE_FILENAME: &str = "tiktok_campaign_report";

/// Configuration for a report run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Records per page when paginating for display or print.
    ///
    /// Default: 20.
    pub page_size: NonZeroUsize,

    /// Pause between consecutive extractor calls.
    ///
    /// Zero disables the pause. Default: 100ms.
    #[serde(with = "duration_millis")]
    pub request_delay: Duration,

    /// Ignore session entries and call the extractor for every URL.
    pub force_refresh: bool,

    /// Session entries older than this are re-fetched (None = never expire).
    #[serde(with = "option_duration_secs")]
    pub session_ttl: Option<Duration>,

    /// Export settings.
    pub export: ExportConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            request_delay: Duration::from_millis(100),
            force_refresh: false,
            session_ttl: None,
            export: ExportConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the pause between extractor calls.
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Bypass cached session entries.
    pub fn force_refresh(mut self) -> Self {
        self.force_refresh = true;
        self
    }

    /// Expire session entries after `ttl`.
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = Some(ttl);
        self
    }

    /// Set export settings.
    pub fn with_export(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }
}

/// Naming used for exported artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name without extension, shared by both formats.
    pub base_filename: String,

    /// Worksheet name for spreadsheet output.
    pub sheet_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_filename: DEFAULT_BASE_FILENAME.to_string(),
            sheet_name: "Report".to_string(),
        }
    }
}

impl ExportConfig {
    /// Set the base file name.
    pub fn with_base_filename(mut self, base: impl Into<String>) -> Self {
        self.base_filename = base.into();
        self
    }

    /// Set the worksheet name.
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(d)?))
    }
}

mod option_duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match d {
            Some(d) => s.serialize_some(&d.as_secs()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_secs))
    }
}
