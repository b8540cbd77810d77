use anyhow::{Context, Result};
use tracing::{info, info_span};

use sambat_calendar::{CalendarTable, Date};
use sambat_fiscal::{fiscal_year_report, get_fiscal_year};
use sambat_format::from_devanagari;

use crate::cli::FiscalArgs;
use crate::config::SambatConfig;
use crate::convert::build_fiscal_config;

/// Runs the fiscal subcommand.
pub fn run(args: FiscalArgs, table: &CalendarTable, config: &SambatConfig) -> Result<()> {
    let _span = info_span!("fiscal").entered();
    println!("{}", describe(&args, table, config)?);
    Ok(())
}

fn describe(args: &FiscalArgs, table: &CalendarTable, config: &SambatConfig) -> Result<String> {
    let fiscal = build_fiscal_config(&config.fiscal)?;
    let date = match &args.date {
        Some(s) => {
            let input = from_devanagari(s.trim());
            Date::parse(table, &input).with_context(|| format!("invalid BS date: {input:?}"))?
        }
        None => sambat_datetime::today(table).context("failed to read the clock")?,
    };

    if args.report {
        let report = fiscal_year_report(date, &fiscal)?;
        info!(%date, fiscal_year = %report.fiscal_year, "fiscal report");
        return Ok(report.to_json()?);
    }

    let fy = get_fiscal_year(date, &fiscal);
    info!(%date, fiscal_year = %fy, "fiscal year");
    let template = args.format.as_deref().unwrap_or(fiscal.label_format());
    fy.format(template)
        .with_context(|| format!("invalid label format: {template:?}"))
}
