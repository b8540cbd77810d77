use anyhow::{Context, Result};
use tracing::{debug, info_span};

use sambat_calendar::{CalendarTable, Date};
use sambat_datetime::DateTime;
use sambat_format::{format, from_devanagari, parse_datetime_with, parse_with};

use crate::cli::FormatArgs;
use crate::config::SambatConfig;

/// Runs the format subcommand.
pub fn run(args: FormatArgs, table: &CalendarTable, config: &SambatConfig) -> Result<()> {
    let _span = info_span!("format").entered();
    println!("{}", render(&args, table, config)?);
    Ok(())
}

/// Directives that make an input pattern describe a date-time.
const TIME_DIRECTIVES: &[&str] = &["%H", "%h", "%I", "%i", "%M", "%l", "%S", "%s", "%f"];

/// A value containing a time part is parsed as a date-time, anything else
/// as a date.
fn render(args: &FormatArgs, table: &CalendarTable, config: &SambatConfig) -> Result<String> {
    if let Some(input_pattern) = &args.input_pattern {
        return render_with(args, input_pattern, table, config);
    }
    let input = from_devanagari(args.value.trim());
    if input.contains([' ', 'T']) {
        let value = DateTime::parse(table, &input)
            .with_context(|| format!("invalid BS date-time: {input:?}"))?;
        let pattern = args.pattern.as_deref().unwrap_or(&config.format.datetime_pattern);
        debug!(%value, pattern, "formatting date-time");
        Ok(format(&value, pattern))
    } else {
        let value =
            Date::parse(table, &input).with_context(|| format!("invalid BS date: {input:?}"))?;
        let pattern = args.pattern.as_deref().unwrap_or(&config.format.date_pattern);
        debug!(%value, pattern, "formatting date");
        Ok(format(&value, pattern))
    }
}

/// Parses with an explicit pattern; the input is taken as written so
/// Devanagari directives see Devanagari digits.
fn render_with(
    args: &FormatArgs,
    input_pattern: &str,
    table: &CalendarTable,
    config: &SambatConfig,
) -> Result<String> {
    let input = args.value.trim();
    if TIME_DIRECTIVES.iter().any(|d| input_pattern.contains(d)) {
        let value = parse_datetime_with(table, input, input_pattern)
            .with_context(|| format!("cannot read {input:?} as {input_pattern:?}"))?;
        let pattern = args.pattern.as_deref().unwrap_or(&config.format.datetime_pattern);
        debug!(%value, pattern, "formatting parsed date-time");
        Ok(format(&value, pattern))
    } else {
        let value = parse_with(table, input, input_pattern)
            .with_context(|| format!("cannot read {input:?} as {input_pattern:?}"))?;
        let pattern = args.pattern.as_deref().unwrap_or(&config.format.date_pattern);
        debug!(%value, pattern, "formatting parsed date");
        Ok(format(&value, pattern))
    }
}
