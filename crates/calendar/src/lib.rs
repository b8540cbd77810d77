//! # sambat-calendar
//!
//! Table-driven arithmetic for the Bikram Sambat calendar.
//!
//! Month lengths in Bikram Sambat are not given by a rule, so every
//! computation is driven by a [`CalendarTable`] of per-year month lengths.
//! Each day in the table has an ordinal (1 is Baishakh 1 of the first year),
//! and dates convert to and from ordinals in O(log n).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CSV rows"] -->|"CalendarTable::from_reader()"| T["CalendarTable"]
//!     T -->|"ordinal::to_ordinal()"| O["ordinal"]
//!     O -->|"ordinal::from_ordinal()"| D["Date"]
//!     D -->|".to_naive_date()"| G["chrono::NaiveDate"]
//!     G -->|"Date::from_naive_date()"| D
//!     D -->|"DateRange::new()"| R["consecutive Dates"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use sambat_calendar::{CalendarTable, Date, Weekday};
//!
//! let table = CalendarTable::bundled()?;
//! let date = Date::new(&table, 2077, 5, 19)?;
//! assert_eq!(date.to_gregorian(), (2020, 9, 4));
//! assert_eq!(date.weekday(), Weekday::Friday);
//! assert_eq!(date.add_days(10)?.to_string(), "2077-05-29");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `table` | Month-length table and CSV loading |
//! | `ordinal` | `(year, month, day)` to ordinal and back |
//! | `date` | Validated date bound to a table |
//! | `weekday` | Day of the week |
//! | `range` | Inclusive date iteration |
//! | `parse` | `YYYY-MM-DD` parsing |
//! | `error` | Error types |

mod date;
mod error;
pub mod ordinal;
mod parse;
mod range;
mod table;
mod weekday;

pub use date::Date;
pub use error::{CalendarError, ErrorKind};
pub use parse::{digits, parse_ymd};
pub use range::DateRange;
pub use table::{CalendarTable, default_anchor};
pub use weekday::Weekday;
