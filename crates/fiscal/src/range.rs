//! Per-day fiscal years over a date range.

use std::iter::FusedIterator;

use sambat_calendar::{Date, DateRange};

use crate::config::FiscalYearConfig;
use crate::fiscal_year::{FiscalYear, get_fiscal_year};

/// Yields the fiscal year of every date from `start` to `end` inclusive.
///
/// Clone before iterating to walk the range again.
#[derive(Debug, Clone)]
pub struct FiscalYearRange<'t> {
    days: DateRange<'t>,
    config: FiscalYearConfig,
}

impl<'t> FiscalYearRange<'t> {
    pub fn new(start: Date<'t>, end: Date<'t>, config: &FiscalYearConfig) -> Self {
        Self {
            days: DateRange::new(start, end),
            config: config.clone(),
        }
    }
}

impl Iterator for FiscalYearRange<'_> {
    type Item = FiscalYear;

    fn next(&mut self) -> Option<Self::Item> {
        self.days.next().map(|date| get_fiscal_year(date, &self.config))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.days.size_hint()
    }
}

impl ExactSizeIterator for FiscalYearRange<'_> {}

impl FusedIterator for FiscalYearRange<'_> {}

/// Fiscal year of every date in `start..=end`.
pub fn fiscal_year_range<'t>(
    start: Date<'t>,
    end: Date<'t>,
    config: &FiscalYearConfig,
) -> FiscalYearRange<'t> {
    FiscalYearRange::new(start, end, config)
}
