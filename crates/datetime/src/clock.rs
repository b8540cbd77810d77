//! Current time and timestamp helpers.

use chrono::Utc;
use sambat_calendar::{CalendarTable, Date};
use tracing::debug;

use crate::datetime::DateTime;
use crate::error::DateTimeError;
use crate::offset::NepalTime;

impl<'t> DateTime<'t> {
    /// Current time in Nepal, aware.
    ///
    /// # Errors
    ///
    /// Returns a range error if the system clock is outside the table.
    pub fn now(table: &'t CalendarTable) -> Result<Self, DateTimeError> {
        let now = Utc::now();
        debug!(utc = %now, "reading system clock");
        Self::from_chrono(table, &now)
    }

    /// Current UTC wall time, naive.
    ///
    /// # Errors
    ///
    /// Returns a range error if the system clock is outside the table.
    pub fn utc_now(table: &'t CalendarTable) -> Result<Self, DateTimeError> {
        Self::now(table)?.to_utc_naive()
    }
}

/// Today's date in Nepal.
///
/// # Errors
///
/// Returns a range error if the system clock is outside the table.
pub fn today(table: &CalendarTable) -> Result<Date<'_>, DateTimeError> {
    Ok(DateTime::now(table)?.date())
}

/// Nepal date of a POSIX timestamp.
///
/// # Errors
///
/// Returns [`DateTimeError::TimestampOutOfRange`].
pub fn date_from_timestamp(table: &CalendarTable, t: f64) -> Result<Date<'_>, DateTimeError> {
    Ok(DateTime::from_timestamp(table, t, Some(NepalTime))?.date())
}
