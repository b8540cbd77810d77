//! Pattern-driven parsing, the inverse of [`format`](crate::format).

use sambat_calendar::{CalendarTable, Date, Weekday};
use sambat_datetime::{DateTime, NepalTime, Time};

use crate::error::ParseError;
use crate::names::{
    MONTH_LONG, MONTH_NEPALI, MONTH_SHORT, WEEKDAY_LONG, WEEKDAY_NEPALI_LONG,
    WEEKDAY_NEPALI_SHORT, WEEKDAY_SHORT,
};
use crate::numerals::DEVANAGARI_DIGITS;

/// Parses a BS date from `input` according to `pattern`.
///
/// Directives are those of [`format`](crate::format) and read exactly what it
/// writes: numbers are zero-padded to a fixed width (`%Y` four digits, `%f`
/// six, the rest two), names must match one of the tables and `%%` matches
/// `%%`. `%y`/`%k` read years 2000..=2099. Year, month and day are required;
/// time directives are checked for shape and otherwise ignored. A weekday
/// directive must agree with the date.
///
/// # Errors
///
/// Format errors ([`ParseError::Mismatch`], [`ParseError::TrailingInput`],
/// [`ParseError::MissingField`], [`ParseError::UnsupportedDirective`],
/// [`ParseError::TrailingPercent`]) for text or patterns of the wrong shape,
/// and range errors for fields naming a day that does not exist.
///
/// # Examples
///
/// ```ignore
/// let date = parse_with(&table, "19 Bhadau 2077", "%d %B %Y")?;
/// assert_eq!(date.ymd(), (2077, 5, 19));
/// ```
pub fn parse_with<'t>(
    table: &'t CalendarTable,
    input: &str,
    pattern: &str,
) -> Result<Date<'t>, ParseError> {
    let fields = Parser::new(input).run(pattern)?;
    fields.date(table)
}

/// Parses a BS date-time from `input` according to `pattern`.
///
/// Missing time fields default to zero. `%I`/`%i` read 01..=12 and combine
/// with `%p` (AM when absent); `%H` wins over both. The result is aware
/// when the pattern has `%z` or `%Z`, which match `+0545`, and naive
/// otherwise.
///
/// # Errors
///
/// See [`parse_with`]; additionally range errors for time fields out of
/// bounds.
pub fn parse_datetime_with<'t>(
    table: &'t CalendarTable,
    input: &str,
    pattern: &str,
) -> Result<DateTime<'t>, ParseError> {
    let fields = Parser::new(input).run(pattern)?;
    let date = fields.date(table)?;
    let time = fields.time()?;
    Ok(DateTime::combine(date, time, fields.tz))
}

#[derive(Clone, Copy)]
enum Script {
    Latin,
    Devanagari,
}

impl Script {
    fn digit(self, c: char) -> Option<u32> {
        match self {
            Script::Latin if c.is_ascii_digit() => c.to_digit(10),
            Script::Latin => None,
            Script::Devanagari => DEVANAGARI_DIGITS
                .iter()
                .position(|&d| d == c)
                .map(|i| i as u32),
        }
    }
}

#[derive(Debug, Default)]
struct Fields {
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
    weekday: Option<Weekday>,
    hour: Option<u8>,
    hour12: Option<u8>,
    pm: bool,
    minute: Option<u8>,
    second: Option<u8>,
    microsecond: Option<u32>,
    tz: Option<NepalTime>,
}

impl Fields {
    fn date<'t>(&self, table: &'t CalendarTable) -> Result<Date<'t>, ParseError> {
        let missing = |field| ParseError::MissingField { field };
        let year = self.year.ok_or_else(|| missing("year"))?;
        let month = self.month.ok_or_else(|| missing("month"))?;
        let day = self.day.ok_or_else(|| missing("day"))?;
        let date = Date::new(table, year, month, day)?;
        if let Some(parsed) = self.weekday
            && parsed != date.weekday()
        {
            return Err(ParseError::WeekdayMismatch {
                parsed,
                actual: date.weekday(),
            });
        }
        Ok(date)
    }

    fn time(&self) -> Result<Time, ParseError> {
        let hour = match (self.hour, self.hour12) {
            (Some(hour), _) => hour,
            (None, Some(hour)) if (1..=12).contains(&hour) => {
                hour % 12 + if self.pm { 12 } else { 0 }
            }
            (None, Some(hour)) => return Err(ParseError::InvalidHour12 { hour }),
            (None, None) => 0,
        };
        Ok(Time::new(
            hour,
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.microsecond.unwrap_or(0),
        )?)
    }
}

struct Parser<'i> {
    input: &'i str,
    pos: usize,
    fields: Fields,
}

impl<'i> Parser<'i> {
    fn new(input: &'i str) -> Self {
        Self {
            input,
            pos: 0,
            fields: Fields::default(),
        }
    }

    fn run(mut self, pattern: &str) -> Result<Fields, ParseError> {
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                self.literal(c)?;
                continue;
            }
            let Some(directive) = chars.next() else {
                return Err(ParseError::TrailingPercent {
                    pattern: pattern.to_string(),
                });
            };
            self.directive(directive)?;
        }
        if !self.rest().is_empty() {
            return Err(ParseError::TrailingInput {
                rest: self.rest().to_string(),
            });
        }
        Ok(self.fields)
    }

    fn directive(&mut self, directive: char) -> Result<(), ParseError> {
        use Script::{Devanagari, Latin};
        match directive {
            'Y' => self.fields.year = Some(self.number(4, Latin)? as i32),
            'K' => self.fields.year = Some(self.number(4, Devanagari)? as i32),
            'y' => self.fields.year = Some(2000 + self.number(2, Latin)? as i32),
            'k' => self.fields.year = Some(2000 + self.number(2, Devanagari)? as i32),
            'm' => self.fields.month = Some(self.number(2, Latin)? as u8),
            'n' => self.fields.month = Some(self.number(2, Devanagari)? as u8),
            'b' => self.fields.month = Some(self.name(&MONTH_SHORT)? as u8 + 1),
            'B' => self.fields.month = Some(self.name(&MONTH_LONG)? as u8 + 1),
            'N' => self.fields.month = Some(self.name(&MONTH_NEPALI)? as u8 + 1),
            'd' => self.fields.day = Some(self.number(2, Latin)? as u8),
            'D' => self.fields.day = Some(self.number(2, Devanagari)? as u8),
            'a' => self.fields.weekday = Some(self.weekday(&WEEKDAY_SHORT)?),
            'A' => self.fields.weekday = Some(self.weekday(&WEEKDAY_LONG)?),
            'g' => self.fields.weekday = Some(self.weekday(&WEEKDAY_NEPALI_SHORT)?),
            'G' => self.fields.weekday = Some(self.weekday(&WEEKDAY_NEPALI_LONG)?),
            'w' => {
                let start = self.pos;
                let n = self.number(1, Latin)?;
                if n > 6 {
                    self.pos = start;
                    return Err(self.mismatch("a weekday number 0..=6"));
                }
                self.fields.weekday = Some(Weekday::from_sunday_zero(i64::from(n)));
            }
            'H' => self.fields.hour = Some(self.number(2, Latin)? as u8),
            'h' => self.fields.hour = Some(self.number(2, Devanagari)? as u8),
            'I' => self.fields.hour12 = Some(self.number(2, Latin)? as u8),
            'i' => self.fields.hour12 = Some(self.number(2, Devanagari)? as u8),
            'p' => self.fields.pm = self.name(&["AM", "PM"])? == 1,
            'M' => self.fields.minute = Some(self.number(2, Latin)? as u8),
            'l' => self.fields.minute = Some(self.number(2, Devanagari)? as u8),
            'S' => self.fields.second = Some(self.number(2, Latin)? as u8),
            's' => self.fields.second = Some(self.number(2, Devanagari)? as u8),
            'f' => self.fields.microsecond = Some(self.number(6, Latin)?),
            'z' | 'Z' => {
                let name = NepalTime.tzname();
                if !self.rest().starts_with(name) {
                    return Err(self.mismatch(name));
                }
                self.pos += name.len();
                self.fields.tz = Some(NepalTime);
            }
            '%' => {
                self.literal('%')?;
                self.literal('%')?;
            }
            directive => return Err(ParseError::UnsupportedDirective { directive }),
        }
        Ok(())
    }

    fn rest(&self) -> &'i str {
        &self.input[self.pos..]
    }

    fn mismatch(&self, expected: impl Into<String>) -> ParseError {
        ParseError::Mismatch {
            input: self.input.to_string(),
            position: self.pos,
            expected: expected.into(),
        }
    }

    fn literal(&mut self, c: char) -> Result<(), ParseError> {
        if !self.rest().starts_with(c) {
            return Err(self.mismatch(format!("{c:?}")));
        }
        self.pos += c.len_utf8();
        Ok(())
    }

    /// Reads exactly `width` digits of `script`.
    fn number(&mut self, width: usize, script: Script) -> Result<u32, ParseError> {
        let start = self.pos;
        let mut value = 0;
        for _ in 0..width {
            let Some(digit) = self.rest().chars().next().and_then(|c| {
                let d = script.digit(c)?;
                self.pos += c.len_utf8();
                Some(d)
            }) else {
                let err = self.mismatch(match script {
                    Script::Latin => format!("{width} digits"),
                    Script::Devanagari => format!("{width} Devanagari digits"),
                });
                self.pos = start;
                return Err(err);
            };
            value = value * 10 + digit;
        }
        Ok(value)
    }

    /// Index of the longest entry of `names` the input starts with.
    fn name(&mut self, names: &[&str]) -> Result<usize, ParseError> {
        let rest = self.rest();
        let Some((index, name)) = names
            .iter()
            .enumerate()
            .filter(|(_, name)| rest.starts_with(**name))
            .max_by_key(|(_, name)| name.len())
        else {
            return Err(self.mismatch(format!("one of {}", names.join(", "))));
        };
        self.pos += name.len();
        Ok(index)
    }

    fn weekday(&mut self, names: &[&str; 7]) -> Result<Weekday, ParseError> {
        let index = self.name(names)?;
        Ok(Weekday::from_sunday_zero(index as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sambat_calendar::ErrorKind;

    use crate::strftime::format;

    fn table() -> CalendarTable {
        CalendarTable::bundled().unwrap()
    }

    #[test]
    fn iso_date() {
        let t = table();
        let date = parse_with(&t, "2077-05-19", "%Y-%m-%d").unwrap();
        assert_eq!(date.ymd(), (2077, 5, 19));
    }

    #[test]
    fn month_names() {
        let t = table();
        assert_eq!(parse_with(&t, "19 Bhadau 2077", "%d %B %Y").unwrap().ymd(), (2077, 5, 19));
        assert_eq!(parse_with(&t, "Bha 19, 2077", "%b %d, %Y").unwrap().ymd(), (2077, 5, 19));
        assert_eq!(parse_with(&t, "भदौ १९ २०७७", "%N %D %K").unwrap().ymd(), (2077, 5, 19));
    }

    #[test]
    fn devanagari_digits() {
        let t = table();
        let date = parse_with(&t, "२०७७-०५-०९", "%K-%n-%D").unwrap();
        assert_eq!(date.ymd(), (2077, 5, 9));
        let date = parse_with(&t, "७७/०५/०९", "%k/%n/%D").unwrap();
        assert_eq!(date.ymd(), (2077, 5, 9));
        // Latin digits do not satisfy a Devanagari directive.
        assert_eq!(
            parse_with(&t, "2077-05-09", "%K-%n-%D").unwrap_err().kind(),
            ErrorKind::Format
        );
    }

    #[test]
    fn weekday_must_agree() {
        let t = table();
        assert!(parse_with(&t, "Fri 2077-05-19", "%a %Y-%m-%d").is_ok());
        assert_eq!(
            parse_with(&t, "Monday 2077-05-19", "%A %Y-%m-%d").unwrap_err(),
            ParseError::WeekdayMismatch {
                parsed: Weekday::Monday,
                actual: Weekday::Friday,
            }
        );
        assert!(parse_with(&t, "5 2077-05-19", "%w %Y-%m-%d").is_ok());
        assert_eq!(
            parse_with(&t, "9 2077-05-19", "%w %Y-%m-%d").unwrap_err().kind(),
            ErrorKind::Format
        );
    }

    #[test]
    fn shape_errors_are_format() {
        let t = table();
        let cases = [
            ("2077/05/19", "%Y-%m-%d"),
            ("2077-5-19", "%Y-%m-%d"),
            ("2077-05-19 extra", "%Y-%m-%d"),
            ("19 Bhadra 2077", "%d %B %Y"),
            ("2077-05", "%Y-%m"),
            ("2077-05-19", "%Y-%m-%Q"),
            ("2077-05-19", "%Y-%m-%d%"),
        ];
        for (input, pattern) in cases {
            let err = parse_with(&t, input, pattern).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "{input:?} with {pattern:?}: {err}");
        }
    }

    #[test]
    fn specific_shape_errors() {
        let t = table();
        assert_eq!(
            parse_with(&t, "2077/05/19", "%Y-%m-%d").unwrap_err(),
            ParseError::Mismatch {
                input: "2077/05/19".into(),
                position: 4,
                expected: "'-'".into(),
            }
        );
        assert_eq!(
            parse_with(&t, "2077-05", "%Y-%m").unwrap_err(),
            ParseError::MissingField { field: "day" }
        );
        assert_eq!(
            parse_with(&t, "x", "%Q").unwrap_err(),
            ParseError::UnsupportedDirective { directive: 'Q' }
        );
    }

    #[test]
    fn field_errors_are_range() {
        let t = table();
        for input in ["2077-13-01", "2077-05-32", "2101-01-01", "2077-00-10"] {
            let err = parse_with(&t, input, "%Y-%m-%d").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Range, "{input}: {err}");
        }
        let err = parse_datetime_with(&t, "2077-05-19 24:00", "%Y-%m-%d %H:%M").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let err = parse_datetime_with(&t, "2077-05-19 13 PM", "%Y-%m-%d %I %p").unwrap_err();
        assert_eq!(err, ParseError::InvalidHour12 { hour: 13 });
    }

    #[test]
    fn twelve_hour_clock() {
        let t = table();
        let pattern = "%Y-%m-%d %I:%M %p";
        let at = |input| parse_datetime_with(&t, input, pattern).unwrap().hour();
        assert_eq!(at("2077-05-19 12:00 AM"), 0);
        assert_eq!(at("2077-05-19 01:30 AM"), 1);
        assert_eq!(at("2077-05-19 12:00 PM"), 12);
        assert_eq!(at("2077-05-19 11:59 PM"), 23);
    }

    #[test]
    fn zone_makes_aware() {
        let t = table();
        let aware = parse_datetime_with(&t, "2077-05-19 10:30+0545", "%Y-%m-%d %H:%M%z").unwrap();
        assert!(aware.is_aware());
        assert_eq!(aware, DateTime::new(&t, 2077, 5, 19, 10, 30, 0, 0).unwrap());
        let naive = parse_datetime_with(&t, "2077-05-19 10:30", "%Y-%m-%d %H:%M").unwrap();
        assert!(!naive.is_aware());
        assert_eq!(
            parse_datetime_with(&t, "2077-05-19 10:30+0000", "%Y-%m-%d %H:%M%z")
                .unwrap_err()
                .kind(),
            ErrorKind::Format
        );
    }

    #[test]
    fn percent_matches_as_formatted() {
        let t = table();
        let date = Date::new(&t, 2077, 5, 19).unwrap();
        let text = format(&date, "%Y%% %m %d");
        assert_eq!(text, "2077%% 05 19");
        assert_eq!(parse_with(&t, &text, "%Y%% %m %d").unwrap(), date);
    }

    #[test]
    fn formatted_text_parses_back() {
        let t = table();
        let dt = DateTime::new(&t, 2081, 11, 3, 14, 5, 9, 42).unwrap();
        let pattern = "%A %d %B %Y %I:%M:%S.%f %p %z";
        let text = format(&dt, pattern);
        assert_eq!(parse_datetime_with(&t, &text, pattern).unwrap(), dt);
    }
}
