use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span};

use sambat_calendar::{CalendarTable, Date};
use sambat_format::{Strftime, from_devanagari};

use crate::cli::ConvertArgs;
use crate::config::SambatConfig;

/// Runs the convert subcommand.
pub fn run(args: ConvertArgs, table: &CalendarTable, config: &SambatConfig) -> Result<()> {
    let _span = info_span!("convert").entered();
    println!("{}", convert(&args, table, config)?);
    Ok(())
}

fn convert(args: &ConvertArgs, table: &CalendarTable, config: &SambatConfig) -> Result<String> {
    let input = from_devanagari(args.date.trim());
    if args.to_bs && !args.to_ad {
        let ad = NaiveDate::parse_from_str(&input, "%Y-%m-%d")
            .with_context(|| format!("invalid Gregorian date: {input:?}"))?;
        let bs = Date::from_naive_date(table, ad)
            .with_context(|| format!("no BS date for {ad}"))?;
        info!(%ad, %bs, "AD -> BS");
        Ok(bs.strftime(&config.format.date_pattern))
    } else {
        let bs = Date::parse(table, &input)
            .with_context(|| format!("invalid BS date: {input:?}"))?;
        let ad = bs.to_naive_date();
        info!(%bs, %ad, "BS -> AD");
        Ok(ad.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(date: &str, to_bs: bool) -> ConvertArgs {
        ConvertArgs {
            date: date.to_string(),
            to_ad: !to_bs,
            to_bs,
        }
    }

    #[test]
    fn bs_to_ad() {
        let table = CalendarTable::bundled().unwrap();
        let config = SambatConfig::default();
        assert_eq!(convert(&args("2077-05-19", false), &table, &config).unwrap(), "2020-09-04");
        assert_eq!(convert(&args("२०७७-०५-१९", false), &table, &config).unwrap(), "2020-09-04");
    }

    #[test]
    fn ad_to_bs() {
        let table = CalendarTable::bundled().unwrap();
        let config = SambatConfig::default();
        assert_eq!(convert(&args("2024-04-13", true), &table, &config).unwrap(), "2081-01-01");
        assert!(convert(&args("1900-01-01", true), &table, &config).is_err());
    }
}
