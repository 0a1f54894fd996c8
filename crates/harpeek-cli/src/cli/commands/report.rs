//! `harpeek <path>` – print the auth-related entries of a HAR file.

use harpeek_core::report::{self, ReportOptions};
use std::io::Write;
use std::path::Path;

use crate::cli::Outcome;

/// The error line is already in `out` when this returns `Failed`.
pub fn run_report<W: Write>(path: &Path, options: &ReportOptions, out: &mut W) -> Outcome {
    match report::run_report(path, options, out) {
        Ok(outcome) => {
            tracing::debug!(
                "matched {} of {} entries in {}",
                outcome.matched,
                outcome.total,
                path.display()
            );
            Outcome::Success
        }
        Err(_) => Outcome::Failed,
    }
}
