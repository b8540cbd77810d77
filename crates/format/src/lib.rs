//! # sambat-format
//!
//! strftime-style rendering of Bikram Sambat dates and date-times in English
//! and Nepali, with Devanagari numerals, and parsing of the same patterns.
//!
//! ```ignore
//! use sambat_format::{Strftime, format};
//!
//! let date = Date::new(&table, 2077, 5, 19)?;
//! assert_eq!(format(&date, "%Y-%m-%d"), "2077-05-19");
//! assert_eq!(date.strftime("%K %N %D, %G"), "२०७७ भदौ १९, शुक्रबार");
//! assert_eq!(parse_with(&table, "२०७७ भदौ १९", "%K %N %D")?, date);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `strftime` | Directive expansion and `ctime` |
//! | `strptime` | Parsing text written with the same directives |
//! | `names` | English and Nepali month and weekday names |
//! | `numerals` | Devanagari digits |
//! | `error` | Parse error type |

mod error;
mod names;
mod numerals;
mod strftime;
mod strptime;

pub use error::ParseError;
pub use names::{
    MONTH_LONG, MONTH_NEPALI, MONTH_SHORT, WEEKDAY_LONG, WEEKDAY_NEPALI_LONG,
    WEEKDAY_NEPALI_SHORT, WEEKDAY_SHORT, month_name, weekday_name,
};
pub use numerals::{DEVANAGARI_DIGITS, from_devanagari, to_devanagari};
pub use strftime::{Strftime, ctime, format};
pub use strptime::{parse_datetime_with, parse_with};
