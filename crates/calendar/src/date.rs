//! Bikram Sambat date validated against a calendar table.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::error::CalendarError;
use crate::ordinal;
use crate::parse::parse_ymd;
use crate::table::CalendarTable;
use crate::weekday::Weekday;

/// A date in the Bikram Sambat calendar.
///
/// A `Date` borrows the [`CalendarTable`] it was validated against, so a
/// successfully constructed value always names a day that exists in that
/// table. Equality, ordering and hashing look at `(year, month, day)` only.
#[derive(Clone, Copy)]
pub struct Date<'t> {
    table: &'t CalendarTable,
    year: i32,
    month: u8,
    day: u8,
}

impl PartialEq for Date<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ymd() == other.ymd()
    }
}

impl Eq for Date<'_> {}

impl Hash for Date<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ymd().hash(state);
    }
}

impl PartialOrd for Date<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd().cmp(&other.ymd())
    }
}

impl<'t> Date<'t> {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`], [`CalendarError::InvalidMonth`]
    /// or [`CalendarError::InvalidDay`] if the fields do not name a day in
    /// `table`.
    pub fn new(table: &'t CalendarTable, year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        ordinal::check_ymd(table, year, month, day)?;
        Ok(Self {
            table,
            year,
            month,
            day,
        })
    }

    /// Parses a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Parse`] if the text is malformed and the
    /// errors of [`Date::new`] if it names a day that does not exist.
    pub fn parse(table: &'t CalendarTable, input: &str) -> Result<Self, CalendarError> {
        let (year, month, day) = parse_ymd(input)?;
        Self::new(table, year, month, day)
    }

    /// Creates a `Date` from its ordinal; ordinal 1 is the table's first day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OrdinalOutOfRange`].
    pub fn from_ordinal(table: &'t CalendarTable, n: i32) -> Result<Self, CalendarError> {
        let (year, month, day) = ordinal::from_ordinal(table, n)?;
        Ok(Self {
            table,
            year,
            month,
            day,
        })
    }

    /// Converts a Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidGregorian`] if the Gregorian date does
    /// not exist or falls outside the table.
    pub fn from_gregorian(table: &'t CalendarTable, year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let date = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).ok_or(
            CalendarError::InvalidGregorian {
                year,
                month,
                day,
                reason: "does not exist",
            },
        )?;
        Self::from_naive_date(table, date)
    }

    /// Converts a [`NaiveDate`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidGregorian`] if `date` falls outside
    /// the table.
    pub fn from_naive_date(table: &'t CalendarTable, date: NaiveDate) -> Result<Self, CalendarError> {
        let offset = date.signed_duration_since(table.anchor()).num_days();
        i32::try_from(offset + 1)
            .ok()
            .filter(|n| (1..=table.max_ordinal()).contains(n))
            .map(|n| Self::from_ordinal(table, n))
            .unwrap_or(Err(CalendarError::InvalidGregorian {
                year: date.year(),
                month: date.month() as u8,
                day: date.day() as u8,
                reason: "is outside the calendar table",
            }))
    }

    /// First day of the table.
    pub fn min(table: &'t CalendarTable) -> Self {
        Self {
            table,
            year: table.min_year(),
            month: 1,
            day: 1,
        }
    }

    /// Last day of the table.
    pub fn max(table: &'t CalendarTable) -> Self {
        let year = table.max_year();
        let row = table.row_at(table.year_prefix().len() - 2);
        Self {
            table,
            year,
            month: 12,
            day: (row[12] - row[11]) as u8,
        }
    }

    /// Returns the table this date was validated against.
    pub fn table(self) -> &'t CalendarTable {
        self.table
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=32).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)` as a tuple.
    pub fn ymd(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Day ordinal; Baishakh 1 of the table's first year is 1.
    pub fn to_ordinal(self) -> i32 {
        // Fields were validated against this table, so the lookups cannot fail.
        ordinal::to_ordinal(self.table, self.year, self.month, self.day)
            .expect("Date always holds a day of its table")
    }

    /// Returns the Gregorian date for this day.
    pub fn to_naive_date(self) -> NaiveDate {
        self.table
            .anchor()
            .checked_add_signed(TimeDelta::days(i64::from(self.to_ordinal() - 1)))
            .expect("table spans fit in the gregorian range")
    }

    /// Returns the Gregorian `(year, month, day)` for this day.
    pub fn to_gregorian(self) -> (i32, u8, u8) {
        let date = self.to_naive_date();
        (date.year(), date.month() as u8, date.day() as u8)
    }

    /// Returns the date `days` days later (earlier if negative).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Overflow`] if the result leaves the table.
    pub fn add_days(self, days: i32) -> Result<Self, CalendarError> {
        self.to_ordinal()
            .checked_add(days)
            .filter(|n| (1..=self.table.max_ordinal()).contains(n))
            .ok_or(CalendarError::Overflow)
            .and_then(|n| Self::from_ordinal(self.table, n))
    }

    /// Returns the date `days` days earlier.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Overflow`] if the result leaves the table.
    pub fn sub_days(self, days: i32) -> Result<Self, CalendarError> {
        self.add_days(days.checked_neg().ok_or(CalendarError::Overflow)?)
    }

    /// Signed number of days from `other` to `self`.
    pub fn difference_in_days(self, other: Self) -> i32 {
        self.to_ordinal() - other.to_ordinal()
    }

    /// Total order by `(year, month, day)`.
    pub fn compare(self, other: Self) -> Ordering {
        self.cmp(&other)
    }

    /// Returns the next day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Overflow`] on the last day of the table.
    pub fn succ(self) -> Result<Self, CalendarError> {
        self.add_days(1)
    }

    /// Returns the previous day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Overflow`] on the first day of the table.
    pub fn pred(self) -> Result<Self, CalendarError> {
        self.add_days(-1)
    }

    /// Day of the week. Ordinal 1 (Baishakh 1, 1975) is a Saturday.
    pub fn weekday(self) -> Weekday {
        Weekday::from_sunday_zero(i64::from(self.to_ordinal()) + 5)
    }

    /// Day of the year, 1 for Baishakh 1.
    pub fn day_of_year(self) -> u16 {
        self.table.row(self.year).map_or(0, |row| row[self.month as usize - 1]) + u16::from(self.day)
    }

    /// Length of this date's month.
    pub fn days_in_month(self) -> u8 {
        self.table.days_in_month(self.year, self.month).unwrap_or(0)
    }

    /// Returns this date with the year replaced.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Date::new`].
    pub fn with_year(self, year: i32) -> Result<Self, CalendarError> {
        Self::new(self.table, year, self.month, self.day)
    }

    /// Returns this date with the month replaced.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Date::new`].
    pub fn with_month(self, month: u8) -> Result<Self, CalendarError> {
        Self::new(self.table, self.year, month, self.day)
    }

    /// Returns this date with the day replaced.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Date::new`].
    pub fn with_day(self, day: u8) -> Result<Self, CalendarError> {
        Self::new(self.table, self.year, self.month, day)
    }

    /// Returns the day number of the last day of `month` in `year`, read
    /// straight from the month-length table. This also covers Chaitra of the
    /// table's final year, whose following month is not in the table.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] or
    /// [`CalendarError::InvalidMonth`].
    pub fn last_day_of_month(table: &CalendarTable, year: i32, month: u8) -> Result<u8, CalendarError> {
        table.days_in_month(year, month)
    }
}

impl fmt::Debug for Date<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Date")
            .field("year", &self.year)
            .field("month", &self.month)
            .field("day", &self.day)
            .finish()
    }
}

impl fmt::Display for Date<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CalendarTable {
        CalendarTable::bundled().unwrap()
    }

    #[test]
    fn new_valid() {
        let t = table();
        let date = Date::new(&t, 2077, 5, 19).unwrap();
        assert_eq!(date.year(), 2077);
        assert_eq!(date.month(), 5);
        assert_eq!(date.day(), 19);
        assert_eq!(date.ymd(), (2077, 5, 19));
    }

    #[test]
    fn new_invalid_month() {
        let t = table();
        assert_eq!(
            Date::new(&t, 2080, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_invalid_day() {
        let t = table();
        assert_eq!(
            Date::new(&t, 2080, 1, 0).unwrap_err(),
            CalendarError::InvalidDay {
                day: 0,
                year: 2080,
                month: 1,
                max_day: 31,
            }
        );
        // 2080 Chaitra has 30 days.
        assert!(Date::new(&t, 2080, 12, 31).is_err());
    }

    #[test]
    fn new_year_out_of_range() {
        let t = table();
        assert!(matches!(
            Date::new(&t, 2101, 1, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: 2101, .. }
        ));
    }

    #[test]
    fn gregorian_examples() {
        let t = table();
        let date = Date::new(&t, 2077, 5, 19).unwrap();
        assert_eq!(date.to_gregorian(), (2020, 9, 4));
        assert_eq!(Date::from_gregorian(&t, 2020, 9, 4).unwrap(), date);

        assert_eq!(Date::new(&t, 2000, 1, 1).unwrap().to_gregorian(), (1943, 4, 14));
        assert_eq!(Date::new(&t, 2081, 1, 1).unwrap().to_gregorian(), (2024, 4, 13));
        assert_eq!(Date::min(&t).to_gregorian(), (1918, 4, 13));
    }

    #[test]
    fn from_gregorian_rejects() {
        let t = table();
        assert!(matches!(
            Date::from_gregorian(&t, 2023, 2, 30).unwrap_err(),
            CalendarError::InvalidGregorian { reason: "does not exist", .. }
        ));
        assert!(matches!(
            Date::from_gregorian(&t, 1918, 4, 12).unwrap_err(),
            CalendarError::InvalidGregorian { .. }
        ));
        assert!(Date::from_gregorian(&t, 2044, 4, 13).is_err());
        assert!(Date::from_gregorian(&t, 2044, 4, 12).is_ok());
    }

    #[test]
    fn add_days_within_month() {
        let t = table();
        let date = Date::new(&t, 2077, 5, 19).unwrap();
        // Bhadra 2077 has 31 days.
        assert_eq!(date.add_days(10).unwrap(), Date::new(&t, 2077, 5, 29).unwrap());
    }

    #[test]
    fn add_days_rolls_into_next_month() {
        let t = table();
        let date = Date::new(&t, 2077, 5, 25).unwrap();
        assert_eq!(date.add_days(10).unwrap(), Date::new(&t, 2077, 6, 4).unwrap());
        let last = Date::new(&t, 2077, 12, 31).unwrap();
        assert_eq!(last.add_days(1).unwrap(), Date::new(&t, 2078, 1, 1).unwrap());
    }

    #[test]
    fn add_days_overflow() {
        let t = table();
        assert_eq!(Date::max(&t).add_days(1).unwrap_err(), CalendarError::Overflow);
        assert_eq!(Date::min(&t).sub_days(1).unwrap_err(), CalendarError::Overflow);
        assert_eq!(Date::min(&t).add_days(i32::MAX).unwrap_err(), CalendarError::Overflow);
        assert_eq!(Date::min(&t).sub_days(i32::MIN).unwrap_err(), CalendarError::Overflow);
    }

    #[test]
    fn difference_in_days() {
        let t = table();
        let a = Date::new(&t, 2080, 1, 1).unwrap();
        let b = Date::new(&t, 2081, 1, 1).unwrap();
        assert_eq!(b.difference_in_days(a), 365);
        assert_eq!(a.difference_in_days(b), -365);
    }

    #[test]
    fn weekday_anchor() {
        let t = table();
        // 1918-04-13 was a Saturday, 2020-09-04 a Friday.
        assert_eq!(Date::min(&t).weekday(), Weekday::Saturday);
        assert_eq!(Date::new(&t, 2077, 5, 19).unwrap().weekday(), Weekday::Friday);
    }

    #[test]
    fn day_of_year_and_month_length() {
        let t = table();
        let date = Date::new(&t, 2077, 3, 2).unwrap();
        assert_eq!(date.day_of_year(), 31 + 32 + 2);
        assert_eq!(date.days_in_month(), 31);
    }

    #[test]
    fn last_day_of_month() {
        let t = table();
        assert_eq!(Date::last_day_of_month(&t, 2077, 2).unwrap(), 32);
        assert_eq!(Date::last_day_of_month(&t, 2080, 12).unwrap(), 30);
        assert_eq!(Date::last_day_of_month(&t, 2100, 12).unwrap(), 30);
        assert!(Date::last_day_of_month(&t, 2080, 13).is_err());
    }

    #[test]
    fn last_day_matches_day_before_next_month() {
        let t = table();
        for month in 1..=12u8 {
            let next = if month == 12 {
                Date::new(&t, 2081, 1, 1).unwrap()
            } else {
                Date::new(&t, 2080, month + 1, 1).unwrap()
            };
            assert_eq!(
                Date::last_day_of_month(&t, 2080, month).unwrap(),
                next.pred().unwrap().day()
            );
        }
    }

    #[test]
    fn replace_fields() {
        let t = table();
        let date = Date::new(&t, 2077, 2, 32).unwrap();
        assert_eq!(date.with_day(1).unwrap().ymd(), (2077, 2, 1));
        assert_eq!(date.with_month(4).unwrap().ymd(), (2077, 4, 32));
        assert!(date.with_month(3).is_err());
        assert!(date.with_year(2078).is_err());
    }

    #[test]
    fn ordering() {
        let t = table();
        let a = Date::new(&t, 2079, 12, 30).unwrap();
        let b = Date::new(&t, 2080, 1, 1).unwrap();
        assert!(a < b);
        assert_eq!(a.compare(b), Ordering::Less);
        assert_eq!(b.compare(b), Ordering::Equal);
    }

    #[test]
    fn display() {
        let t = table();
        assert_eq!(Date::new(&t, 2077, 5, 9).unwrap().to_string(), "2077-05-09");
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Date<'static>>();
    }
}
