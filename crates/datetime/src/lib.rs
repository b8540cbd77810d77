//! # sambat-datetime
//!
//! Date-times on top of [`sambat_calendar`] with the single fixed zone
//! Nepal Standard Time (UTC+05:45).
//!
//! Values are *aware* ([`NepalTime`] attached) or *naive*. [`DateTime::new`]
//! attaches the zone; [`DateTime::naive`] does not. Arithmetic runs in
//! microseconds over the table's day ordinals and fails with
//! [`DateTimeError::Overflow`] outside the table.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::TimeDelta;
//! use sambat_calendar::CalendarTable;
//! use sambat_datetime::DateTime;
//!
//! let table = CalendarTable::bundled()?;
//! let dt = DateTime::new(&table, 2077, 5, 19, 10, 30, 0, 0)?;
//! assert_eq!(dt.isoformat('T'), "2077-05-19T10:30:00+05:45");
//! let later = dt.checked_add(TimeDelta::hours(20))?;
//! assert_eq!(later.date().ymd(), (2077, 5, 20));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `offset` | The +05:45 zone |
//! | `time` | Time of day |
//! | `datetime` | Date plus time plus optional zone |
//! | `clock` | System clock and timestamp helpers |
//! | `error` | Error types |

mod clock;
mod datetime;
mod error;
mod offset;
mod time;

pub use clock::{date_from_timestamp, today};
pub use datetime::DateTime;
pub use error::DateTimeError;
pub use offset::NepalTime;
pub use time::Time;
