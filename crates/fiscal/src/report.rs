//! Fiscal year summary report.

use std::collections::BTreeMap;

use sambat_calendar::Date;
use serde::Serialize;

use crate::config::FiscalYearConfig;
use crate::error::FiscalError;
use crate::fiscal_year::{
    end_of_fiscal_year, get_fiscal_quarter, get_fiscal_year, start_of_fiscal_year,
};

/// Summary of the fiscal year containing a date.
///
/// Dates are ISO `YYYY-MM-DD` strings so the report serializes as plain
/// JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiscalYearReport {
    /// Label rendered from the configured template, e.g. `2080/81`.
    pub fiscal_year: String,
    pub start_date: String,
    pub end_date: String,
    /// Quarter (1..=4) of the requested date.
    pub quarter: u8,
    /// quarter -> [first day, last day]
    pub quarters: BTreeMap<u8, [String; 2]>,
}

impl FiscalYearReport {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, FiscalError> {
        serde_json::to_string_pretty(self).map_err(|e| FiscalError::Serialization {
            reason: e.to_string(),
        })
    }
}

/// Builds the report for the fiscal year containing `date`.
///
/// Quarters are three calendar months each, counted from the start month,
/// so the fourth quarter ends on the fiscal year's last day.
///
/// # Errors
///
/// Returns a calendar error if a boundary of the fiscal year falls outside
/// the table and a format error if the label template is invalid.
#[tracing::instrument(skip_all, fields(date = %date))]
pub fn fiscal_year_report(
    date: Date<'_>,
    config: &FiscalYearConfig,
) -> Result<FiscalYearReport, FiscalError> {
    let table = date.table();
    let fy = get_fiscal_year(date, config);
    let start = start_of_fiscal_year(table, fy.start_year(), config.start_month())?;
    let end = end_of_fiscal_year(table, fy.start_year(), config.end_month())?;

    let mut quarters = BTreeMap::new();
    for q in 0..4u8 {
        let (year, month) = month_offset(fy.start_year(), config.start_month(), 3 * q);
        let first = Date::new(table, year, month, 1)?;
        let (year, month) = month_offset(fy.start_year(), config.start_month(), 3 * q + 2);
        let last = Date::new(table, year, month, Date::last_day_of_month(table, year, month)?)?;
        quarters.insert(q + 1, [first.to_string(), last.to_string()]);
    }

    Ok(FiscalYearReport {
        fiscal_year: fy.format(config.label_format())?,
        start_date: start.to_string(),
        end_date: end.to_string(),
        quarter: get_fiscal_quarter(date, config.start_month()),
        quarters,
    })
}

/// `(year, month)` that is `offset` months after `month` of `year`.
fn month_offset(year: i32, month: u8, offset: u8) -> (i32, u8) {
    let zero_based = i32::from(month) - 1 + i32::from(offset);
    (year + zero_based / 12, (zero_based % 12) as u8 + 1)
}
