//! Error types for the sambat-fiscal crate.

use sambat_calendar::{CalendarError, ErrorKind};
use sambat_datetime::DateTimeError;

/// Error type for all fallible operations in the sambat-fiscal crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FiscalError {
    /// A date-level failure, e.g. a fiscal boundary outside the table.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Reading the current date failed.
    #[error(transparent)]
    Clock(#[from] DateTimeError),

    /// Returned when a configured month is outside 1..=12.
    #[error("invalid fiscal {field}: {month} (must be 1..=12)")]
    InvalidMonth {
        /// Which setting was wrong.
        field: &'static str,
        /// The value that was provided.
        month: u8,
    },

    /// Returned when `end_month` is not the month before `start_month`, so
    /// the two do not bound a twelve-month year.
    #[error("fiscal year from month {start_month} to month {end_month} does not span twelve months")]
    UnclosedYear {
        /// The configured first month.
        start_month: u8,
        /// The configured last month.
        end_month: u8,
    },

    /// Returned when a label template names an unknown placeholder.
    #[error("unsupported placeholder in format: {{{name}}}")]
    UnknownPlaceholder {
        /// The placeholder name without braces.
        name: String,
    },

    /// Returned when a label template has an unbalanced brace.
    #[error("malformed format {template:?}: {reason}")]
    InvalidTemplate {
        /// The rejected template.
        template: String,
        /// What was wrong.
        reason: &'static str,
    },

    /// Returned when a report cannot be serialized.
    #[error("failed to serialize report: {reason}")]
    Serialization {
        /// Description of the serializer failure.
        reason: String,
    },
}

impl FiscalError {
    /// Returns the coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FiscalError::Calendar(e) => e.kind(),
            FiscalError::Clock(e) => e.kind(),
            FiscalError::InvalidMonth { .. } | FiscalError::UnclosedYear { .. } => {
                ErrorKind::Range
            }
            FiscalError::UnknownPlaceholder { .. }
            | FiscalError::InvalidTemplate { .. }
            | FiscalError::Serialization { .. } => ErrorKind::Format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_placeholder() {
        let err = FiscalError::UnknownPlaceholder {
            name: "decade".into(),
        };
        assert_eq!(err.to_string(), "unsupported placeholder in format: {decade}");
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn error_invalid_month() {
        let err = FiscalError::InvalidMonth {
            field: "start_month",
            month: 0,
        };
        assert_eq!(err.to_string(), "invalid fiscal start_month: 0 (must be 1..=12)");
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn error_unclosed_year() {
        let err = FiscalError::UnclosedYear {
            start_month: 4,
            end_month: 6,
        };
        assert_eq!(
            err.to_string(),
            "fiscal year from month 4 to month 6 does not span twelve months"
        );
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn error_wraps_calendar() {
        let err = FiscalError::from(CalendarError::Overflow);
        assert_eq!(err.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<FiscalError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<FiscalError>();
    }
}
