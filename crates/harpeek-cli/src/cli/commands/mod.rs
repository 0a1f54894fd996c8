//! CLI command handlers.

mod report;

pub use report::run_report;
