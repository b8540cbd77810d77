use anyhow::{Context, Result};
use tracing::info_span;

use sambat_calendar::CalendarTable;
use sambat_datetime::DateTime;
use sambat_format::format;

use crate::cli::NowArgs;
use crate::config::SambatConfig;

/// Runs the now subcommand.
pub fn run(args: NowArgs, table: &CalendarTable, config: &SambatConfig) -> Result<()> {
    let _span = info_span!("now").entered();
    let now = if args.utc {
        DateTime::utc_now(table)
    } else {
        DateTime::now(table)
    }
    .context("system clock is outside the calendar table")?;
    let pattern = args.pattern.as_deref().unwrap_or(&config.format.datetime_pattern);
    println!("{}", format(&now, pattern));
    Ok(())
}
