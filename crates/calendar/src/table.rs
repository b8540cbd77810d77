//! Per-year month-length table and its prefix sums.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::CalendarError;

/// The bundled month-length table, BS 1975 through BS 2100.
const BUNDLED_CSV: &str = include_str!("../data/calendar_bs.csv");

/// Shortest and longest month a table row may declare.
const MONTH_LENGTHS: std::ops::RangeInclusive<u16> = 29..=32;

/// Gregorian date of Baishakh 1, 1975 BS: the first day of the bundled table.
pub fn default_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1918, 4, 13).expect("1918-04-13 is a valid gregorian date")
}

/// Immutable month-length table for a contiguous run of BS years.
///
/// Each row holds the cumulative day count before every month of its year
/// (`cumulative[m - 1]` days precede month `m`, `cumulative[12]` is the year
/// length), and `days_before_year` is the prefix sum over years, so every
/// lookup is O(1). Ordinal 1 is Baishakh 1 of [`min_year`](Self::min_year).
///
/// Load it once and share it by reference: every [`Date`](crate::Date)
/// borrows the table it was validated against.
#[derive(Clone, PartialEq, Eq)]
pub struct CalendarTable {
    min_year: i32,
    cumulative: Vec<[u16; 13]>,
    days_before_year: Vec<i32>,
    anchor: NaiveDate,
}

impl CalendarTable {
    /// Parses the table shipped with the crate.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled data is corrupt.
    pub fn bundled() -> Result<Self, CalendarError> {
        Self::from_reader(BUNDLED_CSV.as_bytes())
    }

    /// Reads a table from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::TableNotFound`] if `path` does not exist and
    /// any of the load errors of [`from_reader`](Self::from_reader).
    pub fn from_path(path: &Path) -> Result<Self, CalendarError> {
        Self::from_path_with_anchor(path, default_anchor())
    }

    /// Like [`from_path`](Self::from_path) with an explicit Gregorian date for
    /// Baishakh 1 of the first row.
    ///
    /// # Errors
    ///
    /// See [`from_path`](Self::from_path).
    #[tracing::instrument(skip_all, fields(path = %path.display(), %anchor))]
    pub fn from_path_with_anchor(path: &Path, anchor: NaiveDate) -> Result<Self, CalendarError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CalendarError::TableNotFound {
                path: path.to_path_buf(),
            },
            _ => CalendarError::TableRead {
                reason: e.to_string(),
            },
        })?;
        Self::from_reader_with_anchor(file, anchor)
    }

    /// Reads a table from CSV: a header row, then `year,d1,..,d12` rows in
    /// consecutive year order.
    ///
    /// The Gregorian anchor defaults to 1918-04-13, which is only correct
    /// when the first row is 1975; use
    /// [`from_reader_with_anchor`](Self::from_reader_with_anchor) otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::TableRow`] for a row with the wrong number of
    /// columns, a non-numeric field, a month length outside 29..=32 or a year
    /// that does not follow its predecessor, [`CalendarError::EmptyTable`] if
    /// there are no rows and [`CalendarError::TableRead`] if the CSV itself
    /// cannot be read.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CalendarError> {
        Self::from_reader_with_anchor(reader, default_anchor())
    }

    /// Like [`from_reader`](Self::from_reader) with an explicit Gregorian
    /// date for Baishakh 1 of the first row.
    ///
    /// # Errors
    ///
    /// See [`from_reader`](Self::from_reader).
    pub fn from_reader_with_anchor<R: Read>(
        reader: R,
        anchor: NaiveDate,
    ) -> Result<Self, CalendarError> {
        let mut csv = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut min_year = None;
        let mut cumulative = Vec::new();
        let mut days_before_year = vec![0i32];

        for record in csv.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            let row_err = |reason: String| CalendarError::TableRow { line, reason };

            if record.len() != 13 {
                return Err(row_err(format!(
                    "expected 13 columns (year and 12 months), got {}",
                    record.len()
                )));
            }

            let year: i32 = record[0]
                .parse()
                .map_err(|_| row_err(format!("year {:?} is not an integer", &record[0])))?;
            let expected = min_year.map(|first: i32| first + cumulative.len() as i32);
            match expected {
                Some(expected) if year != expected => {
                    return Err(row_err(format!("expected year {expected}, got {year}")));
                }
                None => min_year = Some(year),
                _ => {}
            }

            let mut row = [0u16; 13];
            for m in 1..=12 {
                let days: u16 = record[m].parse().map_err(|_| {
                    row_err(format!(
                        "month {m} length {:?} is not an integer",
                        &record[m]
                    ))
                })?;
                if !MONTH_LENGTHS.contains(&days) {
                    return Err(row_err(format!(
                        "month {m} length {days} outside {}..={}",
                        MONTH_LENGTHS.start(),
                        MONTH_LENGTHS.end()
                    )));
                }
                row[m] = row[m - 1] + days;
            }

            let before = *days_before_year.last().unwrap_or(&0);
            days_before_year.push(before + i32::from(row[12]));
            cumulative.push(row);
        }

        let min_year = min_year.ok_or(CalendarError::EmptyTable)?;
        let table = Self {
            min_year,
            cumulative,
            days_before_year,
            anchor,
        };
        debug!(
            min_year = table.min_year(),
            max_year = table.max_year(),
            max_ordinal = table.max_ordinal(),
            "calendar table loaded"
        );
        Ok(table)
    }

    /// Returns the first year in the table.
    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Returns the last year in the table.
    pub fn max_year(&self) -> i32 {
        self.min_year + self.cumulative.len() as i32 - 1
    }

    /// Returns the ordinal of the last day in the table.
    pub fn max_ordinal(&self) -> i32 {
        *self.days_before_year.last().unwrap_or(&0)
    }

    /// Returns the Gregorian date of ordinal 1.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Number of days in `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] or
    /// [`CalendarError::InvalidMonth`].
    pub fn days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        let row = self.row(year)?;
        let m = check_month(month)?;
        Ok((row[m] - row[m - 1]) as u8)
    }

    /// Number of days in `year` preceding the first day of `month`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] or
    /// [`CalendarError::InvalidMonth`].
    pub fn days_before_month(&self, year: i32, month: u8) -> Result<u16, CalendarError> {
        let row = self.row(year)?;
        let m = check_month(month)?;
        Ok(row[m - 1])
    }

    /// Number of days in the table preceding Baishakh 1 of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`].
    pub fn days_before_year(&self, year: i32) -> Result<i32, CalendarError> {
        let idx = self.year_index(year)?;
        Ok(self.days_before_year[idx])
    }

    /// Length of `year` in days.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`].
    pub fn days_in_year(&self, year: i32) -> Result<u16, CalendarError> {
        Ok(self.row(year)?[12])
    }

    pub(crate) fn year_index(&self, year: i32) -> Result<usize, CalendarError> {
        if !(self.min_year..=self.max_year()).contains(&year) {
            return Err(CalendarError::YearOutOfRange {
                year,
                min: self.min_year,
                max: self.max_year(),
            });
        }
        Ok((year - self.min_year) as usize)
    }

    pub(crate) fn row(&self, year: i32) -> Result<&[u16; 13], CalendarError> {
        let idx = self.year_index(year)?;
        Ok(&self.cumulative[idx])
    }

    /// Cumulative days-before-year, one entry per year plus a final total.
    pub(crate) fn year_prefix(&self) -> &[i32] {
        &self.days_before_year
    }

    pub(crate) fn row_at(&self, idx: usize) -> &[u16; 13] {
        &self.cumulative[idx]
    }
}

impl fmt::Debug for CalendarTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarTable")
            .field("years", &(self.min_year..=self.max_year()))
            .field("max_ordinal", &self.max_ordinal())
            .field("anchor", &self.anchor)
            .finish()
    }
}

fn check_month(month: u8) -> Result<usize, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(month as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CalendarTable {
        CalendarTable::bundled().unwrap()
    }

    #[test]
    fn bundled_bounds() {
        let t = table();
        assert_eq!(t.min_year(), 1975);
        assert_eq!(t.max_year(), 2100);
        assert_eq!(t.max_ordinal(), 46_022);
        assert_eq!(t.anchor(), NaiveDate::from_ymd_opt(1918, 4, 13).unwrap());
    }

    #[test]
    fn lookups() {
        let t = table();
        assert_eq!(t.days_in_month(2077, 1).unwrap(), 31);
        assert_eq!(t.days_in_month(2077, 2).unwrap(), 32);
        assert_eq!(t.days_before_month(2077, 1).unwrap(), 0);
        assert_eq!(t.days_before_month(2077, 3).unwrap(), 63);
        assert_eq!(t.days_before_year(1975).unwrap(), 0);
        assert_eq!(t.days_before_year(1976).unwrap(), 365);
        assert_eq!(t.days_in_year(2077).unwrap(), 366);
    }

    #[test]
    fn year_out_of_range() {
        let t = table();
        assert_eq!(
            t.days_in_month(1974, 1).unwrap_err(),
            CalendarError::YearOutOfRange {
                year: 1974,
                min: 1975,
                max: 2100,
            }
        );
        assert!(t.days_before_year(2101).is_err());
    }

    #[test]
    fn invalid_month() {
        let t = table();
        assert_eq!(
            t.days_in_month(2080, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            t.days_before_month(2080, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn table_integrity_year_sums() {
        let t = table();
        for year in t.min_year()..t.max_year() {
            let total: i32 = (1..=12)
                .map(|m| i32::from(t.days_in_month(year, m).unwrap()))
                .sum();
            assert_eq!(
                total,
                t.days_before_year(year + 1).unwrap() - t.days_before_year(year).unwrap(),
                "year length mismatch at {year}"
            );
        }
    }

    #[test]
    fn table_strictly_increasing() {
        let t = table();
        for pair in t.year_prefix().windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for idx in 0..t.year_prefix().len() - 1 {
            let row = t.row_at(idx);
            for m in 1..=12 {
                assert!(row[m - 1] < row[m]);
            }
        }
    }

    #[test]
    fn from_reader_small_table() {
        let csv = "year,1,2,3,4,5,6,7,8,9,10,11,12\n\
                   2000,30,32,31,32,31,30,30,30,29,30,29,31\n\
                   2001,31,31,32,31,31,31,30,29,30,29,30,30\n";
        let anchor = NaiveDate::from_ymd_opt(1943, 4, 14).unwrap();
        let t = CalendarTable::from_reader_with_anchor(csv.as_bytes(), anchor).unwrap();
        assert_eq!(t.min_year(), 2000);
        assert_eq!(t.max_year(), 2001);
        assert_eq!(t.max_ordinal(), 365 + 365);
        assert_eq!(t.anchor(), anchor);
    }

    #[test]
    fn from_reader_wrong_column_count() {
        let csv = "year,1,2,3,4,5,6,7,8,9,10,11,12\n2000,30,32,31\n";
        let err = CalendarTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(
            matches!(err, CalendarError::TableRow { line: 2, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn from_reader_non_numeric() {
        let csv = "year,1,2,3,4,5,6,7,8,9,10,11,12\n\
                   2000,30,x,31,32,31,30,30,30,29,30,29,31\n";
        let err = CalendarTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CalendarError::TableRow { .. }));
        assert!(err.to_string().contains("month 2"));
    }

    #[test]
    fn from_reader_month_length_out_of_bounds() {
        let csv = "year,1,2,3,4,5,6,7,8,9,10,11,12\n\
                   2000,30,33,31,32,31,30,30,30,29,30,29,31\n";
        let err = CalendarTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("outside 29..=32"));
    }

    #[test]
    fn from_reader_gap_in_years() {
        let csv = "year,1,2,3,4,5,6,7,8,9,10,11,12\n\
                   2000,30,32,31,32,31,30,30,30,29,30,29,31\n\
                   2002,31,31,32,31,31,31,30,29,30,29,30,30\n";
        let err = CalendarTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("expected year 2001, got 2002"));
    }

    #[test]
    fn from_reader_empty() {
        let csv = "year,1,2,3,4,5,6,7,8,9,10,11,12\n";
        assert_eq!(
            CalendarTable::from_reader(csv.as_bytes()).unwrap_err(),
            CalendarError::EmptyTable
        );
    }

    #[test]
    fn table_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarTable>();
    }
}
