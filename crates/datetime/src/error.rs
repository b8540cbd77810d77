//! Error types for the sambat-datetime crate.

use sambat_calendar::{CalendarError, ErrorKind};

/// Error type for all fallible operations in the sambat-datetime crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateTimeError {
    /// A date-level failure: invalid fields, parse errors or overflow.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when an hour is outside 0..=23.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The hour that was provided.
        hour: u8,
    },

    /// Returned when a minute is outside 0..=59.
    #[error("invalid minute: {minute} (must be 0..=59)")]
    InvalidMinute {
        /// The minute that was provided.
        minute: u8,
    },

    /// Returned when a second is outside 0..=59.
    #[error("invalid second: {second} (must be 0..=59)")]
    InvalidSecond {
        /// The second that was provided.
        second: u8,
    },

    /// Returned when a microsecond is outside 0..=999_999.
    #[error("invalid microsecond: {microsecond} (must be 0..=999999)")]
    InvalidMicrosecond {
        /// The microsecond that was provided.
        microsecond: u32,
    },

    /// Returned when an operation mixes a naive and an aware value.
    #[error("cannot {op} naive and aware datetimes")]
    NaiveAwareMix {
        /// The operation that was attempted.
        op: &'static str,
    },

    /// Returned when `fromutc` is given a value without the Nepal offset.
    #[error("fromutc() requires an aware datetime with the +05:45 offset")]
    FromUtcNaive,

    /// Returned when datetime arithmetic leaves the table.
    #[error("datetime arithmetic result out of range")]
    Overflow,

    /// Returned when a POSIX timestamp falls outside the table.
    #[error("timestamp {timestamp} out of range")]
    TimestampOutOfRange {
        /// Seconds since 1970-01-01T00:00:00Z.
        timestamp: f64,
    },

    /// Returned when a datetime or time string is malformed.
    #[error("malformed datetime {input:?}: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// What was expected.
        reason: &'static str,
    },
}

impl DateTimeError {
    /// Returns the coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DateTimeError::Calendar(e) => e.kind(),
            DateTimeError::InvalidHour { .. }
            | DateTimeError::InvalidMinute { .. }
            | DateTimeError::InvalidSecond { .. }
            | DateTimeError::InvalidMicrosecond { .. }
            | DateTimeError::TimestampOutOfRange { .. } => ErrorKind::Range,
            DateTimeError::NaiveAwareMix { .. } | DateTimeError::FromUtcNaive => {
                ErrorKind::TypeMismatch
            }
            DateTimeError::Overflow => ErrorKind::Overflow,
            DateTimeError::Parse { .. } => ErrorKind::Format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_hour() {
        let err = DateTimeError::InvalidHour { hour: 24 };
        assert_eq!(err.to_string(), "invalid hour: 24 (must be 0..=23)");
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn error_naive_aware_mix() {
        let err = DateTimeError::NaiveAwareMix { op: "compare" };
        assert_eq!(err.to_string(), "cannot compare naive and aware datetimes");
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn error_calendar_is_transparent() {
        let err = DateTimeError::from(CalendarError::InvalidMonth { month: 13 });
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(DateTimeError::from(CalendarError::Overflow).kind(), ErrorKind::Overflow);
    }

    #[test]
    fn error_kinds() {
        assert_eq!(DateTimeError::Overflow.kind(), ErrorKind::Overflow);
        assert_eq!(DateTimeError::FromUtcNaive.kind(), ErrorKind::TypeMismatch);
        assert_eq!(
            DateTimeError::TimestampOutOfRange { timestamp: 1e20 }.kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DateTimeError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DateTimeError>();
    }
}
