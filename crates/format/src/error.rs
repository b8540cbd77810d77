//! Error types for the sambat-format crate.

use sambat_calendar::{CalendarError, ErrorKind, Weekday};
use sambat_datetime::DateTimeError;

/// Error type for pattern-driven parsing.
///
/// Formatting never fails; only [`parse_with`](crate::parse_with) and
/// [`parse_datetime_with`](crate::parse_datetime_with) return this.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The parsed fields name a date that does not exist.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// The parsed fields name a time of day that does not exist.
    #[error(transparent)]
    DateTime(#[from] DateTimeError),

    /// Returned when the pattern ends in a lone `%`.
    #[error("pattern {pattern:?} ends with a lone '%'")]
    TrailingPercent {
        /// The rejected pattern.
        pattern: String,
    },

    /// Returned for a directive the parser does not understand.
    #[error("unsupported directive in pattern: %{directive}")]
    UnsupportedDirective {
        /// The character after `%`.
        directive: char,
    },

    /// Returned when the input does not have the shape the pattern asks for.
    #[error("input {input:?} does not match pattern at byte {position}: expected {expected}")]
    Mismatch {
        /// The full input.
        input: String,
        /// Byte offset of the first unmatched character.
        position: usize,
        /// What the pattern wanted there.
        expected: String,
    },

    /// Returned when input is left over after the whole pattern matched.
    #[error("unparsed input after pattern: {rest:?}")]
    TrailingInput {
        /// The unmatched tail.
        rest: String,
    },

    /// Returned when the pattern has no directive for a required field.
    #[error("pattern has no {field} directive")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// Returned when a 12-hour clock value is outside 1..=12.
    #[error("invalid 12-hour clock hour: {hour} (must be 1..=12)")]
    InvalidHour12 {
        /// The value that was provided.
        hour: u8,
    },

    /// Returned when a parsed weekday disagrees with the parsed date.
    #[error("weekday {parsed:?} does not match the date, which is a {actual:?}")]
    WeekdayMismatch {
        /// Weekday named in the input.
        parsed: Weekday,
        /// Weekday of the parsed date.
        actual: Weekday,
    },
}

impl ParseError {
    /// Returns the coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Calendar(e) => e.kind(),
            ParseError::DateTime(e) => e.kind(),
            ParseError::TrailingPercent { .. }
            | ParseError::UnsupportedDirective { .. }
            | ParseError::Mismatch { .. }
            | ParseError::TrailingInput { .. }
            | ParseError::MissingField { .. } => ErrorKind::Format,
            ParseError::InvalidHour12 { .. } | ParseError::WeekdayMismatch { .. } => {
                ErrorKind::Range
            }
        }
    }
}
