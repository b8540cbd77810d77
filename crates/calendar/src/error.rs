//! Error types for the sambat-calendar crate.

use std::path::PathBuf;

/// Coarse classification shared by every error in the workspace.
///
/// Bindings map these to different user-facing messages: a [`Format`]
/// error means the text was malformed, a [`Range`] error means it was
/// well-formed but names a day that does not exist.
///
/// [`Format`]: ErrorKind::Format
/// [`Range`]: ErrorKind::Range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed textual representation or pattern.
    Format,
    /// A field outside its valid bounds, including ordinals outside the table.
    Range,
    /// Wrong kind of argument, e.g. mixing naive and aware values.
    TypeMismatch,
    /// Arithmetic result outside the representable ordinal range.
    Overflow,
    /// The calendar table is missing or unparseable.
    Load,
}

/// Error type for all fallible operations in the sambat-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the calendar table file does not exist.
    #[error("calendar table not found: {}", path.display())]
    TableNotFound {
        /// Path that could not be opened.
        path: PathBuf,
    },

    /// Returned when the table source cannot be read as CSV.
    #[error("failed to read calendar table: {reason}")]
    TableRead {
        /// Description of the underlying read failure.
        reason: String,
    },

    /// Returned when a table row is malformed.
    #[error("malformed calendar table row {line}: {reason}")]
    TableRow {
        /// 1-based line number in the source, header included.
        line: u64,
        /// What was wrong with the row.
        reason: String,
    },

    /// Returned when the table source holds a header but no rows.
    #[error("calendar table has no rows")]
    EmptyTable,

    /// Returned when a year is outside the years covered by the table.
    #[error("year {year} out of range (must be {min}..={max})")]
    YearOutOfRange {
        /// The year that was requested.
        year: i32,
        /// First year of the table.
        min: i32,
        /// Last year of the table.
        max: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (must be 1..={max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// Year of the month.
        year: i32,
        /// The month for which the day is invalid.
        month: u8,
        /// Length of that month.
        max_day: u8,
    },

    /// Returned when an ordinal is outside `1..=max_ordinal`.
    #[error("ordinal {ordinal} out of range (must be 1..={max})")]
    OrdinalOutOfRange {
        /// The ordinal that was requested.
        ordinal: i64,
        /// Largest ordinal of the table.
        max: i32,
    },

    /// Returned when date arithmetic leaves the table.
    #[error("date arithmetic result out of range")]
    Overflow,

    /// Returned when a Gregorian date does not exist or falls outside the table.
    #[error("gregorian date {year}-{month:02}-{day:02} {reason}")]
    InvalidGregorian {
        /// Gregorian year.
        year: i32,
        /// Gregorian month.
        month: u8,
        /// Gregorian day.
        day: u8,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Returned when a date string does not have the `YYYY-MM-DD` shape.
    #[error("malformed date {input:?}: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// What was expected.
        reason: &'static str,
    },
}

impl CalendarError {
    /// Returns the coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalendarError::TableNotFound { .. }
            | CalendarError::TableRead { .. }
            | CalendarError::TableRow { .. }
            | CalendarError::EmptyTable => ErrorKind::Load,
            CalendarError::YearOutOfRange { .. }
            | CalendarError::InvalidMonth { .. }
            | CalendarError::InvalidDay { .. }
            | CalendarError::OrdinalOutOfRange { .. }
            | CalendarError::InvalidGregorian { .. } => ErrorKind::Range,
            CalendarError::Overflow => ErrorKind::Overflow,
            CalendarError::Parse { .. } => ErrorKind::Format,
        }
    }
}

impl From<csv::Error> for CalendarError {
    fn from(e: csv::Error) -> Self {
        CalendarError::TableRead {
            reason: e.to_string(),
        }
    }
}
