//! Day of the week.

/// Day of the week, numbered from Sunday = 0 as the Nepali week is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// Aaitabar.
    Sunday = 0,
    /// Sombar.
    Monday = 1,
    /// Mangalbar.
    Tuesday = 2,
    /// Budhabar.
    Wednesday = 3,
    /// Bihibar.
    Thursday = 4,
    /// Shukrabar.
    Friday = 5,
    /// Shanibar, the weekly holiday.
    Saturday = 6,
}

impl Weekday {
    /// All days in week order starting from Sunday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns the weekday for `n mod 7`, where 0 is Sunday.
    pub fn from_sunday_zero(n: i64) -> Self {
        Self::ALL[n.rem_euclid(7) as usize]
    }

    /// Days since Sunday (0..=6).
    pub fn num_days_from_sunday(self) -> u8 {
        self as u8
    }

    /// Returns the following day.
    pub fn succ(self) -> Self {
        Self::from_sunday_zero(i64::from(self as u8) + 1)
    }
}
