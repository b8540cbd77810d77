//! Bikram Sambat date-time, naive or attached to Nepal time.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};
use sambat_calendar::{CalendarTable, Date, Weekday};
use tracing::trace;

use crate::error::DateTimeError;
use crate::offset::NepalTime;
use crate::time::{MICROS_PER_DAY, MICROS_PER_SECOND, Time};

/// Largest timestamp magnitude, in seconds, accepted before any arithmetic.
const MAX_TIMESTAMP_SECONDS: f64 = 1e12;

/// A Bikram Sambat date and time of day.
///
/// A value is either *aware* (attached to [`NepalTime`]) or *naive*. Naive
/// values are treated as Nepal wall time wherever an instant is needed, e.g.
/// by [`timestamp`](Self::timestamp).
///
/// Equality between a naive and an aware value is `false`; ordering them
/// yields `None` from [`PartialOrd`] and an error from
/// [`compare`](Self::compare).
#[derive(Clone, Copy)]
pub struct DateTime<'t> {
    date: Date<'t>,
    time: Time,
    tz: Option<NepalTime>,
}

impl<'t> DateTime<'t> {
    /// Creates a date-time attached to [`NepalTime`].
    ///
    /// # Errors
    ///
    /// Returns the date errors of [`Date::new`] and the time errors of
    /// [`Time::new`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        table: &'t CalendarTable,
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Result<Self, DateTimeError> {
        Self::naive(table, year, month, day, hour, minute, second, microsecond)
            .map(|dt| dt.with_timezone(Some(NepalTime)))
    }

    /// Creates a naive date-time.
    ///
    /// # Errors
    ///
    /// See [`DateTime::new`].
    #[allow(clippy::too_many_arguments)]
    pub fn naive(
        table: &'t CalendarTable,
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Result<Self, DateTimeError> {
        let date = Date::new(table, year, month, day)?;
        let time = Time::new(hour, minute, second, microsecond)?;
        Ok(Self::combine(date, time, None))
    }

    /// Merges a date, a time of day and an optional zone.
    pub fn combine(date: Date<'t>, time: Time, tz: Option<NepalTime>) -> Self {
        Self { date, time, tz }
    }

    /// Returns this value with the zone replaced; the wall time is unchanged.
    pub fn with_timezone(self, tz: Option<NepalTime>) -> Self {
        Self { tz, ..self }
    }

    /// Returns this value with the date replaced.
    pub fn with_date(self, date: Date<'t>) -> Self {
        Self { date, ..self }
    }

    /// Returns this value with the time of day replaced.
    pub fn with_time(self, time: Time) -> Self {
        Self { time, ..self }
    }

    /// Replaces the year, keeping month, day, time and zone.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Date::new`] if the day does not exist in the
    /// new year.
    pub fn with_year(self, year: i32) -> Result<Self, DateTimeError> {
        Ok(self.with_date(self.date.with_year(year)?))
    }

    /// Replaces the month.
    ///
    /// # Errors
    ///
    /// See [`DateTime::with_year`].
    pub fn with_month(self, month: u8) -> Result<Self, DateTimeError> {
        Ok(self.with_date(self.date.with_month(month)?))
    }

    /// Replaces the day of the month.
    ///
    /// # Errors
    ///
    /// See [`DateTime::with_year`].
    pub fn with_day(self, day: u8) -> Result<Self, DateTimeError> {
        Ok(self.with_date(self.date.with_day(day)?))
    }

    /// Replaces the hour.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidHour`] outside 0..=23.
    pub fn with_hour(self, hour: u8) -> Result<Self, DateTimeError> {
        let t = self.time;
        Ok(self.with_time(Time::new(hour, t.minute(), t.second(), t.microsecond())?))
    }

    /// Replaces the minute.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidMinute`] outside 0..=59.
    pub fn with_minute(self, minute: u8) -> Result<Self, DateTimeError> {
        let t = self.time;
        Ok(self.with_time(Time::new(t.hour(), minute, t.second(), t.microsecond())?))
    }

    /// Replaces the second.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidSecond`] outside 0..=59.
    pub fn with_second(self, second: u8) -> Result<Self, DateTimeError> {
        let t = self.time;
        Ok(self.with_time(Time::new(t.hour(), t.minute(), second, t.microsecond())?))
    }

    /// Replaces the microsecond.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidMicrosecond`] above 999_999.
    pub fn with_microsecond(self, microsecond: u32) -> Result<Self, DateTimeError> {
        let t = self.time;
        Ok(self.with_time(Time::new(t.hour(), t.minute(), t.second(), microsecond)?))
    }

    /// Parses `YYYY-MM-DD HH:MM:SS[.ffffff]`, with `T` accepted as the
    /// separator. A trailing `+05:45` or `+0545` makes the result aware,
    /// otherwise it is naive.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::Parse`] or a calendar parse error for
    /// malformed text and range errors for fields that do not exist.
    pub fn parse(table: &'t CalendarTable, input: &str) -> Result<Self, DateTimeError> {
        let text = input.trim();
        let (rest, tz) = match text
            .strip_suffix("+05:45")
            .or_else(|| text.strip_suffix("+0545"))
        {
            Some(rest) => (rest, Some(NepalTime)),
            None => (text, None),
        };
        let Some((date, time)) = rest.split_once([' ', 'T']) else {
            return Err(DateTimeError::Parse {
                input: input.to_string(),
                reason: "expected YYYY-MM-DD HH:MM:SS[.ffffff]",
            });
        };
        let date = Date::parse(table, date)?;
        let time = Time::parse(time)?;
        Ok(Self::combine(date, time, tz))
    }

    /// Earliest naive value: the table's first day at midnight.
    pub fn min(table: &'t CalendarTable) -> Self {
        Self::combine(Date::min(table), Time::MIDNIGHT, None)
    }

    /// Latest naive value: the table's last day at `23:59:59.999999`.
    pub fn max(table: &'t CalendarTable) -> Self {
        Self::combine(Date::max(table), Time::MAX, None)
    }

    /// Converts any chrono date-time to an aware Nepal value.
    ///
    /// # Errors
    ///
    /// Returns a range error if the instant falls outside the table.
    pub fn from_chrono<Tz: TimeZone>(
        table: &'t CalendarTable,
        dt: &chrono::DateTime<Tz>,
    ) -> Result<Self, DateTimeError> {
        let local = dt
            .naive_utc()
            .checked_add_signed(NepalTime.utcoffset())
            .ok_or(DateTimeError::Overflow)?;
        let date = Date::from_naive_date(table, local.date())?;
        Ok(Self::combine(date, Time::from_naive_time(local.time()), Some(NepalTime)))
    }

    /// Returns the UTC instant; naive values are read as Nepal wall time.
    pub fn to_chrono_utc(self) -> chrono::DateTime<Utc> {
        let local = self.date.to_naive_date().and_time(self.time.to_naive_time());
        Utc.from_utc_datetime(&(local - NepalTime.utcoffset()))
    }

    /// Builds a value from seconds since 1970-01-01T00:00:00Z.
    ///
    /// With `Some(NepalTime)` the result is aware; with `None` it is naive
    /// Nepal wall time. The fraction is rounded half away from zero to the
    /// nearest microsecond.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::TimestampOutOfRange`] if `t` is not finite
    /// or the instant falls outside the table.
    pub fn from_timestamp(
        table: &'t CalendarTable,
        t: f64,
        tz: Option<NepalTime>,
    ) -> Result<Self, DateTimeError> {
        let utc = timestamp_to_micros(t)?;
        let local = epoch_micros(table) + utc + NepalTime::OFFSET_MICROS;
        trace!(timestamp = t, aware = tz.is_some(), "building datetime from timestamp");
        Self::from_micros(table, local, tz)
            .map_err(|_| DateTimeError::TimestampOutOfRange { timestamp: t })
    }

    /// Builds a naive value holding UTC wall time.
    ///
    /// # Errors
    ///
    /// See [`DateTime::from_timestamp`].
    pub fn utc_from_timestamp(table: &'t CalendarTable, t: f64) -> Result<Self, DateTimeError> {
        let utc = timestamp_to_micros(t)?;
        Self::from_micros(table, epoch_micros(table) + utc, None)
            .map_err(|_| DateTimeError::TimestampOutOfRange { timestamp: t })
    }

    /// Seconds since 1970-01-01T00:00:00Z.
    pub fn timestamp(self) -> f64 {
        self.timestamp_micros() as f64 / MICROS_PER_SECOND as f64
    }

    /// Microseconds since 1970-01-01T00:00:00Z.
    pub fn timestamp_micros(self) -> i64 {
        // Naive values are Nepal wall time, so both cases subtract the offset.
        self.local_micros() - NepalTime::OFFSET_MICROS - epoch_micros(self.date.table())
    }

    /// ISO 8601 with `sep` between date and time, e.g.
    /// `2077-05-19T10:30:00+05:45`. Microseconds are shown only when
    /// non-zero and the offset only when aware.
    pub fn isoformat(self, sep: char) -> String {
        let mut out = format!("{}{sep}{}", self.date, self.time);
        if let Some(tz) = self.tz {
            out.push_str(&tz.to_string());
        }
        out
    }

    /// Adds a duration.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::Overflow`] if the result leaves the table.
    pub fn checked_add(self, delta: TimeDelta) -> Result<Self, DateTimeError> {
        delta
            .num_microseconds()
            .and_then(|us| self.local_micros().checked_add(us))
            .ok_or(DateTimeError::Overflow)
            .and_then(|us| Self::from_micros(self.date.table(), us, self.tz))
    }

    /// Subtracts a duration.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::Overflow`] if the result leaves the table.
    pub fn checked_sub(self, delta: TimeDelta) -> Result<Self, DateTimeError> {
        delta
            .num_microseconds()
            .and_then(|us| self.local_micros().checked_sub(us))
            .ok_or(DateTimeError::Overflow)
            .and_then(|us| Self::from_micros(self.date.table(), us, self.tz))
    }

    /// Duration from `other` to `self`.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::NaiveAwareMix`] if exactly one side is aware.
    pub fn signed_duration_since(self, other: Self) -> Result<TimeDelta, DateTimeError> {
        self.check_same_kind(other, "subtract")?;
        Ok(TimeDelta::microseconds(self.instant_micros() - other.instant_micros()))
    }

    /// Orders two values of the same kind by instant.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::NaiveAwareMix`] if exactly one side is aware.
    pub fn compare(self, other: Self) -> Result<Ordering, DateTimeError> {
        self.check_same_kind(other, "compare")?;
        Ok(self.instant_micros().cmp(&other.instant_micros()))
    }

    /// Returns the zone, `None` when naive.
    pub fn tz(self) -> Option<NepalTime> {
        self.tz
    }

    /// Returns `true` if attached to [`NepalTime`].
    pub fn is_aware(self) -> bool {
        self.tz.is_some()
    }

    /// UTC offset, `None` when naive.
    pub fn utcoffset(self) -> Option<TimeDelta> {
        self.tz.map(NepalTime::utcoffset)
    }

    /// Daylight-saving adjustment, `None` when naive.
    pub fn dst(self) -> Option<TimeDelta> {
        self.tz.map(NepalTime::dst)
    }

    /// Zone name, `None` when naive.
    pub fn tzname(self) -> Option<&'static str> {
        self.tz.map(NepalTime::tzname)
    }

    /// Expresses this value in `tz`. A naive value is read as Nepal wall
    /// time, so only the zone is attached.
    pub fn astimezone(self, tz: NepalTime) -> Self {
        self.with_timezone(Some(tz))
    }

    /// Naive UTC wall time for the same instant.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::Overflow`] if the shifted value leaves the
    /// table.
    pub fn to_utc_naive(self) -> Result<Self, DateTimeError> {
        Self::from_micros(
            self.date.table(),
            self.local_micros() - NepalTime::OFFSET_MICROS,
            None,
        )
    }

    /// Returns the date part.
    pub fn date(self) -> Date<'t> {
        self.date
    }

    /// Returns the time of day.
    pub fn time(self) -> Time {
        self.time
    }

    /// Returns the time of day together with the zone.
    pub fn timetz(self) -> (Time, Option<NepalTime>) {
        (self.time, self.tz)
    }

    pub fn year(self) -> i32 {
        self.date.year()
    }

    pub fn month(self) -> u8 {
        self.date.month()
    }

    pub fn day(self) -> u8 {
        self.date.day()
    }

    pub fn hour(self) -> u8 {
        self.time.hour()
    }

    pub fn minute(self) -> u8 {
        self.time.minute()
    }

    pub fn second(self) -> u8 {
        self.time.second()
    }

    pub fn microsecond(self) -> u32 {
        self.time.microsecond()
    }

    pub fn weekday(self) -> Weekday {
        self.date.weekday()
    }

    /// Microseconds since ordinal 0 midnight, in wall time.
    fn local_micros(self) -> i64 {
        i64::from(self.date.to_ordinal()) * MICROS_PER_DAY + self.time.micros_of_day()
    }

    /// Wall time shifted to UTC for aware values. Only used between values
    /// of the same kind, so naive values compare by wall time.
    fn instant_micros(self) -> i64 {
        match self.tz {
            Some(tz) => self.local_micros() - tz.utcoffset().num_seconds() * MICROS_PER_SECOND,
            None => self.local_micros(),
        }
    }

    fn check_same_kind(self, other: Self, op: &'static str) -> Result<(), DateTimeError> {
        if self.is_aware() != other.is_aware() {
            return Err(DateTimeError::NaiveAwareMix { op });
        }
        Ok(())
    }

    fn from_micros(
        table: &'t CalendarTable,
        us: i64,
        tz: Option<NepalTime>,
    ) -> Result<Self, DateTimeError> {
        let ordinal = us.div_euclid(MICROS_PER_DAY);
        let ordinal = i32::try_from(ordinal)
            .ok()
            .filter(|n| (1..=table.max_ordinal()).contains(n))
            .ok_or(DateTimeError::Overflow)?;
        let date = Date::from_ordinal(table, ordinal)?;
        Ok(Self::combine(date, Time::from_micros_of_day(us.rem_euclid(MICROS_PER_DAY)), tz))
    }
}

/// Wall-time microseconds of 1970-01-01T00:00:00 in `table`'s ordinal space.
fn epoch_micros(table: &CalendarTable) -> i64 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("1970-01-01 is a valid date");
    (1 + epoch.signed_duration_since(table.anchor()).num_days()) * MICROS_PER_DAY
}

fn timestamp_to_micros(t: f64) -> Result<i64, DateTimeError> {
    if !t.is_finite() || t.abs() > MAX_TIMESTAMP_SECONDS {
        return Err(DateTimeError::TimestampOutOfRange { timestamp: t });
    }
    let seconds = t.trunc();
    // f64::round is half away from zero; the fraction may round up to a full
    // second, which the integer sum carries.
    let micros = ((t - seconds) * 1e6).round();
    Ok(seconds as i64 * MICROS_PER_SECOND + micros as i64)
}

impl PartialEq for DateTime<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.is_aware() == other.is_aware() && self.instant_micros() == other.instant_micros()
    }
}

impl Eq for DateTime<'_> {}

impl Hash for DateTime<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_aware().hash(state);
        self.instant_micros().hash(state);
    }
}

impl PartialOrd for DateTime<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other).ok()
    }
}

impl fmt::Debug for DateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateTime")
            .field("date", &self.date)
            .field("time", &self.time)
            .field("tz", &self.tz)
            .finish()
    }
}

impl fmt::Display for DateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.isoformat(' '))
    }
}
