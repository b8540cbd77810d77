//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use crate::config::{CalendarToml, FiscalToml};

use sambat_calendar::CalendarTable;
use sambat_fiscal::FiscalYearConfig;

/// Parses a Gregorian `YYYY-MM-DD` anchor date.
pub fn parse_anchor(s: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
        Ok(d) => Ok(d),
        Err(e) => bail!("invalid calendar anchor {s:?}: {e}"),
    }
}

/// Loads the calendar table named by `[calendar]`, or the bundled one.
///
/// An anchor without a table path is rejected.
pub fn build_table(c: &CalendarToml) -> Result<CalendarTable> {
    let table = match (&c.table, &c.anchor) {
        (None, None) => CalendarTable::bundled().context("bundled calendar table is corrupt")?,
        (None, Some(_)) => bail!("calendar.anchor requires calendar.table"),
        (Some(path), None) => CalendarTable::from_path(path)
            .with_context(|| format!("failed to load calendar table: {}", path.display()))?,
        (Some(path), Some(anchor)) => {
            let anchor = parse_anchor(anchor)?;
            CalendarTable::from_path_with_anchor(path, anchor)
                .with_context(|| format!("failed to load calendar table: {}", path.display()))?
        }
    };
    Ok(table)
}

/// Builds a [`FiscalYearConfig`] from `[fiscal]`.
pub fn build_fiscal_config(f: &FiscalToml) -> Result<FiscalYearConfig> {
    let config = FiscalYearConfig::new(f.start_month, f.end_month)
        .context("invalid [fiscal] months")?
        .with_label_format(f.label_format.clone());
    config.validate().context("invalid fiscal.label_format")?;
    Ok(config)
}
