//! Error taxonomy for the report pipeline.
//!
//! Skipped rows and lookup misses are not errors; they degrade the report
//! gracefully and never show up here.

use std::path::PathBuf;
use thiserror::Error;

/// Literal the marker row must carry in its first field.
pub const MARKER_LITERAL: &str = "Rapport konfiguration";

#[derive(Debug, Error)]
pub enum ReportError {
    /// The marker row did not match, the file is probably not a configuration export.
    #[error("The marker row does not contain 'Rapport konfiguration'. Found: '{found}'")]
    StructuralFormat { found: String },

    /// An address whose second segment is not a number.
    #[error("Invalid address '{address}' in zone '{zone}': expected <panel>.<number>")]
    SegmentParse { zone: String, address: String },

    /// Only `.csv` exports are accepted.
    #[error("Unsupported file type: {path:?} (expected .csv)")]
    UnsupportedFile { path: PathBuf },

    #[error("Error accessing {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Wrap an io error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}
