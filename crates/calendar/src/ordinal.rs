//! Conversion between `(year, month, day)` and a day ordinal.
//!
//! Ordinal 1 is Baishakh 1 of the table's first year and the ordinal grows by
//! one per day across the whole table, so date arithmetic reduces to integer
//! arithmetic on ordinals.

use crate::error::CalendarError;
use crate::table::CalendarTable;

/// Validates `(year, month, day)` against `table`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`], [`CalendarError::InvalidMonth`]
/// or [`CalendarError::InvalidDay`].
pub fn check_ymd(
    table: &CalendarTable,
    year: i32,
    month: u8,
    day: u8,
) -> Result<(), CalendarError> {
    let max_day = table.days_in_month(year, month)?;
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            year,
            month,
            max_day,
        });
    }
    Ok(())
}

/// `(year, month, day)` -> ordinal.
///
/// # Errors
///
/// Returns the errors of [`check_ymd`].
pub fn to_ordinal(
    table: &CalendarTable,
    year: i32,
    month: u8,
    day: u8,
) -> Result<i32, CalendarError> {
    check_ymd(table, year, month, day)?;
    let before_month = i32::from(table.days_before_month(year, month)?);
    Ok(table.days_before_year(year)? + before_month + i32::from(day))
}

/// Ordinal -> `(year, month, day)`.
///
/// # Errors
///
/// Returns [`CalendarError::OrdinalOutOfRange`] unless
/// `1 <= ordinal <= table.max_ordinal()`.
pub fn from_ordinal(
    table: &CalendarTable,
    ordinal: i32,
) -> Result<(i32, u8, u8), CalendarError> {
    if !(1..=table.max_ordinal()).contains(&ordinal) {
        return Err(CalendarError::OrdinalOutOfRange {
            ordinal: i64::from(ordinal),
            max: table.max_ordinal(),
        });
    }

    // prefix[i] < ordinal <= prefix[i + 1] selects year index i.
    let prefix = table.year_prefix();
    let idx = prefix.partition_point(|&before| before < ordinal) - 1;
    let rem = (ordinal - prefix[idx]) as u16;

    let row = table.row_at(idx);
    let m = row[1..].partition_point(|&before| before < rem);
    let day = rem - row[m];

    Ok((table.min_year() + idx as i32, m as u8 + 1, day as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CalendarTable {
        CalendarTable::bundled().unwrap()
    }

    #[test]
    fn first_and_last_day() {
        let t = table();
        assert_eq!(to_ordinal(&t, 1975, 1, 1).unwrap(), 1);
        assert_eq!(from_ordinal(&t, 1).unwrap(), (1975, 1, 1));
        assert_eq!(to_ordinal(&t, 2100, 12, 30).unwrap(), t.max_ordinal());
        assert_eq!(from_ordinal(&t, t.max_ordinal()).unwrap(), (2100, 12, 30));
    }

    #[test]
    fn month_and_year_boundaries() {
        let t = table();
        // 1975 Baishakh has 31 days.
        assert_eq!(from_ordinal(&t, 31).unwrap(), (1975, 1, 31));
        assert_eq!(from_ordinal(&t, 32).unwrap(), (1975, 2, 1));
        // 1975 has 365 days.
        assert_eq!(from_ordinal(&t, 365).unwrap(), (1975, 12, 30));
        assert_eq!(from_ordinal(&t, 366).unwrap(), (1976, 1, 1));
    }

    #[test]
    fn out_of_range() {
        let t = table();
        assert_eq!(
            from_ordinal(&t, 0).unwrap_err(),
            CalendarError::OrdinalOutOfRange {
                ordinal: 0,
                max: 46_022,
            }
        );
        assert!(from_ordinal(&t, t.max_ordinal() + 1).is_err());
        assert!(from_ordinal(&t, -5).is_err());
    }

    #[test]
    fn invalid_fields() {
        let t = table();
        assert_eq!(
            to_ordinal(&t, 2080, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            to_ordinal(&t, 2080, 1, 0).unwrap_err(),
            CalendarError::InvalidDay {
                day: 0,
                year: 2080,
                month: 1,
                max_day: 31,
            }
        );
    }

    #[test]
    fn roundtrip_all_ordinals() {
        let t = table();
        for n in 1..=t.max_ordinal() {
            let (y, m, d) = from_ordinal(&t, n).unwrap();
            assert_eq!(to_ordinal(&t, y, m, d).unwrap(), n, "roundtrip failed for {n}");
        }
    }

    #[test]
    fn monotonic() {
        let t = table();
        let mut prev = from_ordinal(&t, 1).unwrap();
        for n in 2..=t.max_ordinal() {
            let cur = from_ordinal(&t, n).unwrap();
            assert!(prev < cur, "ordinal {n} not increasing");
            prev = cur;
        }
    }
}
