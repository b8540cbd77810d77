//! Inclusive runs of consecutive dates.

use std::iter::FusedIterator;

use crate::date::Date;

/// Iterator over every date from `start` to `end`, both inclusive.
///
/// Cloning the range before iterating gives an independent copy that starts
/// again from `start`. An `end` earlier than `start` yields nothing.
///
/// ```ignore
/// let start = Date::new(&table, 2080, 12, 29)?;
/// let end = Date::new(&table, 2081, 1, 2)?;
/// let days: Vec<_> = DateRange::new(start, end).collect();
/// assert_eq!(days.len(), 4); // Chaitra 29, 30, Baishakh 1, 2
/// ```
#[derive(Debug, Clone)]
pub struct DateRange<'t> {
    next: Option<Date<'t>>,
    end: Date<'t>,
}

impl<'t> DateRange<'t> {
    /// Creates the range `start..=end`.
    pub fn new(start: Date<'t>, end: Date<'t>) -> Self {
        Self {
            next: (start <= end).then_some(start),
            end,
        }
    }

    /// Number of dates left to yield.
    pub fn remaining(&self) -> usize {
        self.next
            .map_or(0, |next| (self.end.difference_in_days(next) + 1) as usize)
    }
}

impl<'t> Iterator for DateRange<'t> {
    type Item = Date<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ().ok()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRange<'_> {}

impl FusedIterator for DateRange<'_> {}
