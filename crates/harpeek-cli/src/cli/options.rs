//! Merge config file settings with command-line flags.

use anyhow::Result;
use harpeek_core::config::{self, HarpeekConfig};
use harpeek_core::filter::UrlFilter;
use harpeek_core::report::{EntryErrorPolicy, ReportOptions};
use std::path::Path;

use super::Cli;

/// Report options for this invocation: config first, flags on top.
/// An unreadable config falls back to the built-in defaults.
pub fn resolve(cli: &Cli) -> ReportOptions {
    let cfg = match load_config(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("config unavailable, using defaults: {:#}", err);
            HarpeekConfig::default()
        }
    };
    tracing::debug!("loaded config: {:?}", cfg);

    let mut options = cfg.into_options();
    if !cli.patterns.is_empty() {
        options.filter = UrlFilter::new(&cli.patterns);
    }
    if cli.skip_bad_entries {
        options.on_entry_error = EntryErrorPolicy::Skip;
    }
    options
}

fn load_config(explicit: Option<&Path>) -> Result<HarpeekConfig> {
    match explicit {
        Some(path) => config::load_from(path),
        None => config::load_or_init(),
    }
}
