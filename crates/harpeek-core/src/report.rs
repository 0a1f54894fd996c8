//! The HAR report pipeline: load, summarize, filter and render in one pass.
//!
//! All failures are caught once, in [`run_report`], which appends a final
//! `Error parsing HAR: <message>` line after whatever was already written.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::error::ReportError;
use crate::filter::UrlFilter;
use crate::har::{self, HarDocument};
use crate::render::{render_entry, RenderOptions};

/// What to do when a single entry fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryErrorPolicy {
    /// Stop the report at the first bad entry.
    #[default]
    Abort,
    /// Note the bad entry in the output and keep going.
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub filter: UrlFilter,
    pub render: RenderOptions,
    pub on_entry_error: EntryErrorPolicy,
}

/// Counters for a completed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportOutcome {
    pub total: usize,
    pub matched: usize,
    pub skipped: usize,
}

/// Writes the report for an already loaded document.
///
/// Output is `Total entries: <N>` followed by one block per matching entry,
/// in capture order.
pub fn write_report<W: Write>(
    doc: &HarDocument,
    opts: &ReportOptions,
    out: &mut W,
) -> Result<ReportOutcome, ReportError> {
    let mut outcome = ReportOutcome {
        total: doc.summarize(),
        ..ReportOutcome::default()
    };
    writeln!(out, "Total entries: {}", outcome.total)?;

    for raw in doc.entries() {
        let selected = raw.url().and_then(|url| {
            if opts.filter.matches(url) {
                raw.decode().map(Some)
            } else {
                Ok(None)
            }
        });

        match selected {
            Ok(Some(entry)) => {
                render_entry(out, &entry, &opts.render)?;
                outcome.matched += 1;
            }
            Ok(None) => {}
            Err(err) if opts.on_entry_error == EntryErrorPolicy::Skip && err.is_entry_error() => {
                tracing::warn!("skipping malformed HAR entry: {}", err);
                writeln!(out, "Skipping {}", err)?;
                outcome.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(outcome)
}

/// Loads `path` and writes its report to `out`.
///
/// On failure the error line is written to `out` and the error is returned so
/// the caller can pick an exit status; nothing else needs to be printed.
pub fn run_report<W: Write>(
    path: &Path,
    opts: &ReportOptions,
    out: &mut W,
) -> Result<ReportOutcome, ReportError> {
    let result = har::load(path).and_then(|doc| write_report(&doc, opts, out));

    match &result {
        Ok(outcome) => tracing::info!(
            "report for {}: total={} matched={} skipped={}",
            path.display(),
            outcome.total,
            outcome.matched,
            outcome.skipped
        ),
        Err(err) => {
            tracing::warn!("report for {} failed: {}", path.display(), err);
            if let Err(write_err) = writeln!(out, "Error parsing HAR: {}", err) {
                tracing::error!("cannot write error line: {}", write_err);
            }
        }
    }

    result
}
