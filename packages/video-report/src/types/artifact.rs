//! Export artifacts handed to download/save consumers.

use serde::Serialize;
use std::fmt;

/// Which serializer produced an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    /// Preferred spreadsheet format
    Primary,
    /// Flat CSV used when the spreadsheet writer is unavailable
    Fallback,
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportKind::Primary => write!(f, "primary"),
            ExportKind::Fallback => write!(f, "fallback"),
        }
    }
}

/// Serialized report plus the metadata a consumer needs to label and save it.
#[derive(Debug, Clone, Serialize)]
pub struct ExportArtifact {
    pub kind: ExportKind,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

impl ExportArtifact {
    /// Check if the preferred format was produced.
    pub fn is_primary(&self) -> bool {
        self.kind == ExportKind::Primary
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
