//! Text parsing for ISO-shaped dates.

use crate::error::CalendarError;

/// Splits `YYYY-MM-DD` into numeric fields without validating them against a
/// table.
///
/// Exactly four year digits, two month digits and two day digits are
/// accepted, separated by `-`. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`CalendarError::Parse`] for anything else.
pub fn parse_ymd(input: &str) -> Result<(i32, u8, u8), CalendarError> {
    let malformed = |reason| CalendarError::Parse {
        input: input.to_string(),
        reason,
    };
    let text = input.trim();
    let mut parts = text.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed("expected YYYY-MM-DD"));
    };
    if y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return Err(malformed("expected YYYY-MM-DD"));
    }
    let year = digits(y).ok_or_else(|| malformed("year is not a number"))?;
    let month = digits(m).ok_or_else(|| malformed("month is not a number"))?;
    let day = digits(d).ok_or_else(|| malformed("day is not a number"))?;
    Ok((year as i32, month as u8, day as u8))
}

/// Parses a run of ASCII digits; signs and other characters are rejected.
pub fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_iso() {
        assert_eq!(parse_ymd("2077-05-19").unwrap(), (2077, 5, 19));
        assert_eq!(parse_ymd("  2080-12-30\n").unwrap(), (2080, 12, 30));
    }

    #[test]
    fn keeps_out_of_range_fields_for_later_validation() {
        assert_eq!(parse_ymd("2080-13-00").unwrap(), (2080, 13, 0));
    }

    #[test]
    fn rejects_shape() {
        for input in ["2077/05/19", "2077-5-19", "77-05-19", "2077-05", "2077-05-19-01", ""] {
            let err = parse_ymd(input).unwrap_err();
            assert!(matches!(err, CalendarError::Parse { .. }), "{input:?} gave {err:?}");
        }
    }

    #[test]
    fn rejects_non_digits() {
        let err = parse_ymd("20x7-05-19").unwrap_err();
        assert_eq!(
            err,
            CalendarError::Parse {
                input: "20x7-05-19".into(),
                reason: "year is not a number",
            }
        );
        assert!(parse_ymd("2077-+5-19").is_err());
    }

    #[test]
    fn digits_only() {
        assert_eq!(digits("0042"), Some(42));
        assert_eq!(digits("-1"), None);
        assert_eq!(digits(""), None);
    }
}
