//! Logging init: append to a file under the XDG state dir, or, when that is
//! unavailable, to stderr but only if `RUST_LOG` asks for it.
//!
//! Stdout carries the report, so no subscriber ever writes there.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const FILE_FILTER: &str = "info,harpeek=debug,harpeek_core=debug";
const LOG_FILE_NAME: &str = "harpeek.log";

/// Shared append handle to the log file. Each event writes through
/// `&File`, so no per-event handle clone is needed.
#[derive(Clone)]
struct LogFile(Arc<File>);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = &'a File;

    fn make_writer(&'a self) -> Self::Writer {
        &self.0
    }
}

/// Directory holding `harpeek.log`.
pub fn log_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harpeek")?;
    Ok(xdg_dirs.get_state_home().join("harpeek"))
}

/// Creates `dir` if needed and opens the log file inside it for appending.
pub fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("create log dir: {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file: {}", path.display()))?;
    Ok((file, path))
}

/// Initialize structured logging to `~/.local/state/harpeek/harpeek.log` and
/// return the log file path.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<PathBuf> {
    let (file, path) = open_log_file(&log_dir()?)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILE_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(LogFile(Arc::new(file)))
        .with_ansi(false)
        .init();

    tracing::debug!("harpeek logging initialized at {}", path.display());

    Ok(path)
}

/// Filter for the stderr fallback: only an explicit, non-empty and valid
/// `RUST_LOG` value enables it.
fn stderr_filter(rust_log: Option<&str>) -> Option<EnvFilter> {
    rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
}

/// Fallback when init_logging() fails. Installs a stderr subscriber only when
/// `RUST_LOG` is set, so a plain run keeps stderr quiet. Returns whether a
/// subscriber was installed.
pub fn init_logging_stderr() -> bool {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let Some(filter) = stderr_filter(rust_log.as_deref()) else {
        return false;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
    true
}
