//! Error type for the report pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Any failure that ends (or, with the skip policy, interrupts) a report.
///
/// `Display` is always a single line; the reporter prints it after
/// `Error parsing HAR: `.
#[derive(Debug, Error)]
pub enum ReportError {
    /// HAR file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// File content is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Document is JSON but lacks the `log.entries` array.
    #[error("{0}")]
    Shape(String),
    /// An entry is missing a required field or has the wrong type.
    #[error("entry {index}: {source}")]
    Entry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    /// Writing the report to the output stream failed.
    #[error("cannot write report: {0}")]
    Write(#[from] io::Error),
}

impl ReportError {
    /// True for failures tied to a single entry (the only kind the skip policy tolerates).
    pub fn is_entry_error(&self) -> bool {
        matches!(self, ReportError::Entry { .. })
    }
}
