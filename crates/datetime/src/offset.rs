//! The fixed Nepal Standard Time offset.

use std::fmt;

use chrono::{FixedOffset, TimeDelta};

use crate::datetime::DateTime;
use crate::error::DateTimeError;

/// Nepal Standard Time, UTC+05:45 with no daylight saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NepalTime;

impl NepalTime {
    /// Offset from UTC in seconds.
    pub const OFFSET_SECONDS: i32 = 5 * 3600 + 45 * 60;

    /// Offset from UTC in microseconds.
    pub(crate) const OFFSET_MICROS: i64 = Self::OFFSET_SECONDS as i64 * 1_000_000;

    /// Returns the UTC offset, +05:45.
    pub fn utcoffset(self) -> TimeDelta {
        TimeDelta::seconds(i64::from(Self::OFFSET_SECONDS))
    }

    /// Returns the daylight-saving adjustment, always zero.
    pub fn dst(self) -> TimeDelta {
        TimeDelta::zero()
    }

    /// Returns the zone name, `"+0545"`.
    pub fn tzname(self) -> &'static str {
        "+0545"
    }

    /// Returns the equivalent chrono offset.
    pub fn fixed_offset(self) -> FixedOffset {
        FixedOffset::east_opt(Self::OFFSET_SECONDS).expect("+05:45 is a valid offset")
    }

    /// Converts a value whose fields hold UTC wall time into Nepal wall time.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::FromUtcNaive`] if `dt` is naive and
    /// [`DateTimeError::Overflow`] if the shifted value leaves the table.
    pub fn fromutc<'t>(self, dt: DateTime<'t>) -> Result<DateTime<'t>, DateTimeError> {
        if dt.tz() != Some(self) {
            return Err(DateTimeError::FromUtcNaive);
        }
        dt.checked_add(self.utcoffset())
    }
}

impl fmt::Display for NepalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("+05:45")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sambat_calendar::CalendarTable;

    #[test]
    fn offset_values() {
        assert_eq!(NepalTime.utcoffset(), TimeDelta::minutes(345));
        assert_eq!(NepalTime.dst(), TimeDelta::zero());
        assert_eq!(NepalTime.tzname(), "+0545");
        assert_eq!(NepalTime.fixed_offset().local_minus_utc(), 20_700);
        assert_eq!(NepalTime.to_string(), "+05:45");
    }

    #[test]
    fn fromutc_shifts_wall_time() {
        let t = CalendarTable::bundled().unwrap();
        let utc = DateTime::new(&t, 2080, 1, 1, 20, 30, 0, 0).unwrap();
        let local = NepalTime.fromutc(utc).unwrap();
        assert_eq!(local.date().ymd(), (2080, 1, 2));
        assert_eq!((local.hour(), local.minute()), (2, 15));
        assert_eq!(local.tz(), Some(NepalTime));
    }

    #[test]
    fn fromutc_rejects_naive() {
        let t = CalendarTable::bundled().unwrap();
        let naive = DateTime::naive(&t, 2080, 1, 1, 0, 0, 0, 0).unwrap();
        assert_eq!(NepalTime.fromutc(naive).unwrap_err(), DateTimeError::FromUtcNaive);
    }
}
