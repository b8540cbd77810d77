//! Time of day with microsecond resolution.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use sambat_calendar::digits;

use crate::error::DateTimeError;

pub(crate) const MICROS_PER_SECOND: i64 = 1_000_000;
pub(crate) const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

/// A wall-clock time of day, `00:00:00` through `23:59:59.999999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
}

impl Time {
    /// `00:00:00`.
    pub const MIDNIGHT: Time = Time {
        hour: 0,
        minute: 0,
        second: 0,
        microsecond: 0,
    };

    /// `23:59:59.999999`.
    pub const MAX: Time = Time {
        hour: 23,
        minute: 59,
        second: 59,
        microsecond: 999_999,
    };

    /// Creates a validated time of day.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidHour`], [`DateTimeError::InvalidMinute`],
    /// [`DateTimeError::InvalidSecond`] or [`DateTimeError::InvalidMicrosecond`]
    /// for the first field out of range.
    pub fn new(hour: u8, minute: u8, second: u8, microsecond: u32) -> Result<Self, DateTimeError> {
        if hour > 23 {
            return Err(DateTimeError::InvalidHour { hour });
        }
        if minute > 59 {
            return Err(DateTimeError::InvalidMinute { minute });
        }
        if second > 59 {
            return Err(DateTimeError::InvalidSecond { second });
        }
        if microsecond > 999_999 {
            return Err(DateTimeError::InvalidMicrosecond { microsecond });
        }
        Ok(Self {
            hour,
            minute,
            second,
            microsecond,
        })
    }

    /// Parses `HH:MM:SS` with an optional `.f` fraction of one to six digits.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::Parse`] for malformed text and the errors of
    /// [`Time::new`] for out-of-range fields.
    pub fn parse(input: &str) -> Result<Self, DateTimeError> {
        let malformed = |reason| DateTimeError::Parse {
            input: input.to_string(),
            reason,
        };
        let text = input.trim();
        let (hms, fraction) = match text.split_once('.') {
            Some((hms, fraction)) => (hms, Some(fraction)),
            None => (text, None),
        };

        let mut parts = hms.split(':');
        let (Some(h), Some(m), Some(s), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed("expected HH:MM:SS[.ffffff]"));
        };
        let field = |s: &str| {
            (s.len() == 2)
                .then(|| digits(s))
                .flatten()
                .ok_or_else(|| malformed("expected HH:MM:SS[.ffffff]"))
        };
        let (hour, minute, second) = (field(h)? as u8, field(m)? as u8, field(s)? as u8);

        let microsecond = match fraction {
            None => 0,
            Some(f) if (1..=6).contains(&f.len()) => {
                let value = digits(f).ok_or_else(|| malformed("fraction is not a number"))?;
                value * 10u32.pow(6 - f.len() as u32)
            }
            Some(_) => return Err(malformed("fraction must have 1 to 6 digits")),
        };

        Self::new(hour, minute, second, microsecond)
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns the microsecond (0..=999_999).
    pub fn microsecond(self) -> u32 {
        self.microsecond
    }

    /// Returns the equivalent chrono time.
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_micro_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
            self.microsecond,
        )
        .expect("Time fields are validated")
    }

    /// Converts a chrono time, truncating to microseconds. A leap second is
    /// folded into the last microsecond of its minute.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
            microsecond: (time.nanosecond() / 1_000).min(999_999),
        }
    }

    pub(crate) fn micros_of_day(self) -> i64 {
        ((i64::from(self.hour) * 60 + i64::from(self.minute)) * 60 + i64::from(self.second))
            * MICROS_PER_SECOND
            + i64::from(self.microsecond)
    }

    /// `us` must lie in `0..MICROS_PER_DAY`.
    pub(crate) fn from_micros_of_day(us: i64) -> Self {
        let secs = us / MICROS_PER_SECOND;
        Self {
            hour: (secs / 3600) as u8,
            minute: (secs / 60 % 60) as u8,
            second: (secs % 60) as u8,
            microsecond: (us % MICROS_PER_SECOND) as u32,
        }
    }
}

impl fmt::Display for Time {
    /// `HH:MM:SS`, followed by `.ffffff` when the microsecond is non-zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.microsecond != 0 {
            write!(f, ".{:06}", self.microsecond)?;
        }
        Ok(())
    }
}
