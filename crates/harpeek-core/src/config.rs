use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::filter::{UrlFilter, DEFAULT_PATTERNS};
use crate::render::RenderOptions;
use crate::report::{EntryErrorPolicy, ReportOptions};

/// Global configuration loaded from `~/.config/harpeek/config.toml`.
///
/// Every field is optional; the defaults reproduce the built-in report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarpeekConfig {
    /// URL substrings that select an entry for the report.
    pub patterns: Vec<String>,
    /// "abort" (default) stops at the first malformed entry; "skip" notes it and continues.
    pub on_entry_error: EntryErrorPolicy,
    /// Separator width and body truncation limits.
    pub render: RenderOptions,
}

impl Default for HarpeekConfig {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
            on_entry_error: EntryErrorPolicy::default(),
            render: RenderOptions::default(),
        }
    }
}

impl HarpeekConfig {
    pub fn into_options(self) -> ReportOptions {
        ReportOptions {
            filter: UrlFilter::new(self.patterns),
            render: self.render,
            on_entry_error: self.on_entry_error,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harpeek")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarpeekConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarpeekConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from(path: &Path) -> Result<HarpeekConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: HarpeekConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
