//! Fiscal year computation.

use std::fmt;

use sambat_calendar::{CalendarTable, Date};
use serde::Serialize;

use crate::config::FiscalYearConfig;
use crate::error::FiscalError;

/// A fiscal year, named by the BS years it starts and ends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FiscalYear {
    start_year: i32,
    end_year: i32,
}

impl FiscalYear {
    /// The fiscal year starting in `start_year`.
    pub fn new(start_year: i32) -> Self {
        Self {
            start_year,
            end_year: start_year + 1,
        }
    }

    /// Returns the year the fiscal year starts in.
    pub fn start_year(self) -> i32 {
        self.start_year
    }

    /// Returns the year the fiscal year ends in.
    pub fn end_year(self) -> i32 {
        self.end_year
    }

    /// Conventional name, e.g. `FY 2080/81`.
    pub fn name(self) -> String {
        format!("FY {self}")
    }

    /// Renders a label template.
    ///
    /// Placeholders are `{start_year}`, `{end_year}`, `{start_yyyy}`,
    /// `{end_yyyy}`, `{start_yy}`, `{end_yy}` (last two digits) and
    /// `{fiscal_year_name}`. `{{` and `}}` produce literal braces.
    ///
    /// # Errors
    ///
    /// Returns [`FiscalError::UnknownPlaceholder`] for any other name and
    /// [`FiscalError::InvalidTemplate`] for an unbalanced brace.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let fy = FiscalYear::new(2080);
    /// assert_eq!(fy.format("{start_year}-{end_year}")?, "2080-2081");
    /// assert_eq!(fy.format("{fiscal_year_name}")?, "FY 2080/81");
    /// ```
    pub fn format(self, template: &str) -> Result<String, FiscalError> {
        let invalid = |reason| FiscalError::InvalidTemplate {
            template: template.to_string(),
            reason,
        };
        let mut out = String::with_capacity(template.len() + 8);
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.push('}');
                }
                '}' => return Err(invalid("single '}' outside a placeholder")),
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => return Err(invalid("unclosed '{'")),
                        }
                    }
                    out.push_str(&self.placeholder(&name)?);
                }
                c => out.push(c),
            }
        }
        Ok(out)
    }

    fn placeholder(self, name: &str) -> Result<String, FiscalError> {
        let value = match name {
            "start_year" | "start_yyyy" => self.start_year.to_string(),
            "end_year" | "end_yyyy" => self.end_year.to_string(),
            "start_yy" => two_digits(self.start_year),
            "end_yy" => two_digits(self.end_year),
            "fiscal_year_name" => self.name(),
            _ => {
                return Err(FiscalError::UnknownPlaceholder {
                    name: name.to_string(),
                });
            }
        };
        Ok(value)
    }
}

impl fmt::Display for FiscalYear {
    /// `2080/81`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start_year, two_digits(self.end_year))
    }
}

fn two_digits(year: i32) -> String {
    format!("{:02}", year.rem_euclid(100))
}

/// Computes the fiscal year containing `date`.
///
/// Months before `start_month` belong to the fiscal year that started in the
/// previous calendar year.
///
/// # Examples
///
/// ```ignore
/// // Shrawan start (Nepal government):
/// assert_eq!(get_fiscal_year(Date::new(&t, 2080, 4, 1)?, &config), FiscalYear::new(2080));
/// assert_eq!(get_fiscal_year(Date::new(&t, 2081, 3, 31)?, &config), FiscalYear::new(2080));
/// ```
pub fn get_fiscal_year(date: Date<'_>, config: &FiscalYearConfig) -> FiscalYear {
    if date.month() < config.start_month() {
        FiscalYear::new(date.year() - 1)
    } else {
        FiscalYear::new(date.year())
    }
}

/// Fiscal year containing today's date in Nepal.
///
/// # Errors
///
/// Returns [`FiscalError::Clock`] if the system clock is outside the table.
pub fn fiscal_year_today(
    table: &CalendarTable,
    config: &FiscalYearConfig,
) -> Result<FiscalYear, FiscalError> {
    let today = sambat_datetime::today(table)?;
    Ok(get_fiscal_year(today, config))
}

/// Fiscal quarter (1..=4) of `date` for a year starting in `start_month`.
pub fn get_fiscal_quarter(date: Date<'_>, start_month: u8) -> u8 {
    let fiscal_month = (i32::from(date.month()) - i32::from(start_month)).rem_euclid(12);
    (fiscal_month / 3) as u8 + 1
}

/// First day of the fiscal year starting in `year`.
///
/// # Errors
///
/// Returns a calendar error if the day is outside the table or
/// `start_month` is invalid.
pub fn start_of_fiscal_year(
    table: &CalendarTable,
    year: i32,
    start_month: u8,
) -> Result<Date<'_>, FiscalError> {
    Ok(Date::new(table, year, start_month, 1)?)
}

/// Last day of the fiscal year starting in `year`: the last day of
/// `end_month` in `year + 1`. A year closing with Chaitra (12) started in
/// Baishakh and ends within `year` itself.
///
/// # Errors
///
/// Returns a calendar error if the day is outside the table or `end_month`
/// is invalid.
pub fn end_of_fiscal_year(
    table: &CalendarTable,
    year: i32,
    end_month: u8,
) -> Result<Date<'_>, FiscalError> {
    let end_year = if end_month == 12 { year } else { year + 1 };
    let last = Date::last_day_of_month(table, end_year, end_month)?;
    Ok(Date::new(table, end_year, end_month, last)?)
}

/// Whether `date` falls in the fiscal year starting in `fiscal_start_year`,
/// both ends inclusive.
///
/// # Errors
///
/// Returns a calendar error if either boundary is outside the table.
pub fn is_within_fiscal_year(
    date: Date<'_>,
    fiscal_start_year: i32,
    config: &FiscalYearConfig,
) -> Result<bool, FiscalError> {
    let table = date.table();
    let start = start_of_fiscal_year(table, fiscal_start_year, config.start_month())?;
    let end = end_of_fiscal_year(table, fiscal_start_year, config.end_month())?;
    Ok(start <= date && date <= end)
}
