//! Domain types shared across the pipeline.

pub mod artifact;
pub mod config;
pub mod record;
pub mod sheet;

pub use artifact::{ExportArtifact, ExportKind};
pub use config::{ExportConfig, ReportConfig, DEFAULT_BASE_FILENAME, DEFAULT_PAGE_SIZE};
pub use record::{RawMetadata, ReportTable, VideoRecord};
pub use sheet::{Cell, Sheet, EXPORT_HEADERS};
