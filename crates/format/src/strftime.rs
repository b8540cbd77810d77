//! strftime-style formatting.

use sambat_calendar::Date;
use sambat_datetime::{DateTime, NepalTime, Time};

use crate::names::{
    MONTH_LONG, MONTH_NEPALI, MONTH_SHORT, WEEKDAY_LONG, WEEKDAY_NEPALI_LONG,
    WEEKDAY_NEPALI_SHORT, WEEKDAY_SHORT, month_name, weekday_name,
};
use crate::numerals::to_devanagari;

/// A value that can be rendered by [`format`].
///
/// Dates report midnight and no zone, so their time directives render as
/// `00` and `%z`/`%Z` as empty strings.
pub trait Strftime {
    /// The calendar date.
    fn bs_date(&self) -> Date<'_>;

    /// The time of day.
    fn bs_time(&self) -> Time {
        Time::MIDNIGHT
    }

    /// The zone, `None` when naive.
    fn bs_tz(&self) -> Option<NepalTime> {
        None
    }

    /// Shorthand for [`format(self, pattern)`](format).
    fn strftime(&self, pattern: &str) -> String {
        format(self, pattern)
    }
}

impl Strftime for Date<'_> {
    fn bs_date(&self) -> Date<'_> {
        *self
    }
}

impl Strftime for DateTime<'_> {
    fn bs_date(&self) -> Date<'_> {
        self.date()
    }

    fn bs_time(&self) -> Time {
        self.time()
    }

    fn bs_tz(&self) -> Option<NepalTime> {
        self.tz()
    }
}

/// Renders `value` according to `pattern`.
///
/// | Directive | Output |
/// |-----------|--------|
/// | `%a` `%A` | English weekday, short / long |
/// | `%g` `%G` | Nepali weekday, short / long |
/// | `%w` | weekday number, Sunday = 0 |
/// | `%b` `%B` `%N` | month: English short / long, Nepali |
/// | `%d` `%D` | day of month, Latin / Devanagari |
/// | `%m` `%n` | month number, Latin / Devanagari |
/// | `%y` `%k` | two-digit year, Latin / Devanagari |
/// | `%Y` `%K` | full year, Latin / Devanagari |
/// | `%H` `%h` | hour 00..=23, Latin / Devanagari |
/// | `%I` `%i` | hour 01..=12, Latin / Devanagari |
/// | `%p` | `AM` / `PM` |
/// | `%M` `%l` | minute, Latin / Devanagari |
/// | `%S` `%s` | second, Latin / Devanagari |
/// | `%f` | microsecond, six digits |
/// | `%z` `%Z` | `+0545` and the zone name; empty when naive |
/// | `%U` | week of the year, two digits |
///
/// Formatting never fails: any other directive, `%%` included, is copied
/// through unchanged and a trailing `%` is kept.
pub fn format<T: Strftime + ?Sized>(value: &T, pattern: &str) -> String {
    let fields = Fields {
        date: value.bs_date(),
        time: value.bs_time(),
        tz: value.bs_tz(),
    };
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => out.push('%'),
            Some(directive) => match fields.expand(directive) {
                Some(text) => out.push_str(&text),
                None => {
                    out.push('%');
                    out.push(directive);
                }
            },
        }
    }
    out
}

/// `Fri Bha 19 10:30:00 2077`; the day is space-padded to two columns.
pub fn ctime<T: Strftime + ?Sized>(value: &T) -> String {
    let date = value.bs_date();
    format!(
        "{} {:>2} {} {:04}",
        format(value, "%a %b"),
        date.day(),
        format(value, "%H:%M:%S"),
        date.year()
    )
}

struct Fields<'a> {
    date: Date<'a>,
    time: Time,
    tz: Option<NepalTime>,
}

impl Fields<'_> {
    fn expand(&self, directive: char) -> Option<String> {
        let date = self.date;
        let weekday = date.weekday();
        let hour12 = match self.time.hour() % 12 {
            0 => 12,
            h => h,
        };
        let text = match directive {
            'a' => weekday_name(&WEEKDAY_SHORT, weekday).to_string(),
            'A' => weekday_name(&WEEKDAY_LONG, weekday).to_string(),
            'g' => weekday_name(&WEEKDAY_NEPALI_SHORT, weekday).to_string(),
            'G' => weekday_name(&WEEKDAY_NEPALI_LONG, weekday).to_string(),
            'w' => weekday.num_days_from_sunday().to_string(),
            'b' => month_name(&MONTH_SHORT, date.month())?.to_string(),
            'B' => month_name(&MONTH_LONG, date.month())?.to_string(),
            'N' => month_name(&MONTH_NEPALI, date.month())?.to_string(),
            'd' => format!("{:02}", date.day()),
            'D' => to_devanagari(&format!("{:02}", date.day())),
            'm' => format!("{:02}", date.month()),
            'n' => to_devanagari(&format!("{:02}", date.month())),
            'y' => format!("{:02}", date.year().rem_euclid(100)),
            'k' => to_devanagari(&format!("{:02}", date.year().rem_euclid(100))),
            'Y' => date.year().to_string(),
            'K' => to_devanagari(&date.year().to_string()),
            'H' => format!("{:02}", self.time.hour()),
            'h' => to_devanagari(&format!("{:02}", self.time.hour())),
            'I' => format!("{hour12:02}"),
            'i' => to_devanagari(&format!("{hour12:02}")),
            'p' => (if self.time.hour() < 12 { "AM" } else { "PM" }).to_string(),
            'M' => format!("{:02}", self.time.minute()),
            'l' => to_devanagari(&format!("{:02}", self.time.minute())),
            'S' => format!("{:02}", self.time.second()),
            's' => to_devanagari(&format!("{:02}", self.time.second())),
            'f' => format!("{:06}", self.time.microsecond()),
            'z' => self.tz.map_or_else(String::new, utc_offset),
            'Z' => self.tz.map_or_else(String::new, |tz| tz.tzname().to_string()),
            'U' => {
                let week =
                    (date.day_of_year() + 7 - u16::from(weekday.num_days_from_sunday())) / 7;
                format!("{week:02}")
            }
            _ => return None,
        };
        Some(text)
    }
}

/// `+HHMM`.
fn utc_offset(tz: NepalTime) -> String {
    let minutes = tz.utcoffset().num_minutes();
    let sign = if minutes < 0 { '-' } else { '+' };
    let minutes = minutes.abs();
    format!("{sign}{:02}{:02}", minutes / 60, minutes % 60)
}
