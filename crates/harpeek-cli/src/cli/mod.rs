//! CLI for harpeek.

mod commands;
mod options;

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::run_report;

/// Printed on stdout when no HAR path is given.
pub const USAGE: &str = "Usage: harpeek <file_path>";

/// Print the auth-related entries (api/auth, api/oauth, callback) of a HAR capture.
#[derive(Debug, Parser)]
#[command(name = "harpeek")]
#[command(about = "Report auth-related requests captured in a HAR file", long_about = None)]
pub struct Cli {
    /// Path to the HAR file.
    pub path: Option<PathBuf>,

    /// Everything after the path is accepted and ignored, flags included.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    /// URL substring that selects an entry (repeatable; replaces the defaults).
    #[arg(long = "pattern", value_name = "SUBSTR")]
    pub patterns: Vec<String>,

    /// Note malformed entries and keep going instead of stopping at the first one.
    #[arg(long)]
    pub skip_bad_entries: bool,

    /// Read settings from this TOML file instead of ~/.config/harpeek/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// How a run ended; maps to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The report ended with an `Error parsing HAR` line.
    Failed,
    /// No HAR path was given.
    Usage,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::from(1),
            Outcome::Usage => ExitCode::from(2),
        }
    }
}

pub fn run_from_args() -> ExitCode {
    let cli = Cli::parse();
    if !cli.ignored.is_empty() {
        tracing::debug!("ignoring extra arguments: {:?}", cli.ignored);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = execute(&cli, &mut out);
    if let Err(err) = out.flush() {
        tracing::error!("flush stdout: {}", err);
    }
    outcome.exit_code()
}

/// Runs one invocation, writing everything user-facing to `out`.
pub(crate) fn execute<W: Write>(cli: &Cli, out: &mut W) -> Outcome {
    let Some(path) = cli.path.as_deref() else {
        if let Err(err) = writeln!(out, "{}", USAGE) {
            tracing::error!("write usage: {}", err);
        }
        return Outcome::Usage;
    };

    let options = options::resolve(cli);
    run_report(path, &options, out)
}

#[cfg(test)]
mod tests;
