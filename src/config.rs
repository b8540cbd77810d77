use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

/// File read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "sambat.toml";

/// Top-level Sambat configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SambatConfig {
    /// Calendar table settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Fiscal year settings.
    #[serde(default)]
    pub fiscal: FiscalToml,

    /// Default output patterns.
    #[serde(default)]
    pub format: FormatToml,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    /// CSV month-length table; the bundled table when unset.
    pub table: Option<PathBuf>,
    /// Gregorian date (`YYYY-MM-DD`) of Baishakh 1 of the table's first year.
    pub anchor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FiscalToml {
    #[serde(default = "default_start_month")]
    pub start_month: u8,
    #[serde(default = "default_end_month")]
    pub end_month: u8,
    #[serde(default = "default_label_format")]
    pub label_format: String,
}

impl Default for FiscalToml {
    fn default() -> Self {
        Self {
            start_month: default_start_month(),
            end_month: default_end_month(),
            label_format: default_label_format(),
        }
    }
}

fn default_start_month() -> u8 {
    4
}
fn default_end_month() -> u8 {
    3
}
fn default_label_format() -> String {
    sambat_fiscal::DEFAULT_LABEL_FORMAT.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatToml {
    #[serde(default = "default_date_pattern")]
    pub date_pattern: String,
    #[serde(default = "default_datetime_pattern")]
    pub datetime_pattern: String,
}

impl Default for FormatToml {
    fn default() -> Self {
        Self {
            date_pattern: default_date_pattern(),
            datetime_pattern: default_datetime_pattern(),
        }
    }
}

fn default_date_pattern() -> String {
    "%Y-%m-%d".to_string()
}
fn default_datetime_pattern() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
/// the working directory is used if present, else all defaults.
pub fn load(path: Option<&Path>) -> Result<SambatConfig> {
    let path = match path {
        Some(p) => p,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if !fallback.exists() {
                debug!("no config file, using defaults");
                return Ok(SambatConfig::default());
            }
            fallback
        }
    };
    info!(path = %path.display(), "reading config");
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    parse(&s)
}

/// Parses configuration text.
pub fn parse(s: &str) -> Result<SambatConfig> {
    toml::from_str(s).context("failed to parse TOML config")
}
