use serde::{Deserialize, Serialize};

use crate::consts::MIN_DAY;
use crate::{DateTime, YearStart};

/// Returns the start of the custom year containing the given instant.
///
/// The custom year begins on the first day of `year_starts_on`. When the
/// instant's month precedes `year_starts_on`, the containing custom year
/// began in the previous calendar year. The result is always the first
/// instant of that day (00:00:00.000).
///
/// An invalid instant yields the invalid sentinel.
pub fn start_of_year(date: impl Into<DateTime>, year_starts_on: YearStart) -> DateTime {
    let date = date.into();
    let Some((year, month)) = date.year().zip(date.month()) else {
        return DateTime::INVALID;
    };
    let start_year = if year_starts_on.get() > month {
        year - 1
    } else {
        year
    };
    DateTime::from_civil(start_year, year_starts_on.get(), MIN_DAY)
}

/// Returns the end of the custom year containing the given instant:
/// one millisecond before the start of the following custom year
/// (23:59:59.999 on the last day).
///
/// An invalid instant yields the invalid sentinel.
pub fn end_of_year(date: impl Into<DateTime>, year_starts_on: YearStart) -> DateTime {
    let date = date.into();
    let Some((year, month)) = date.year().zip(date.month()) else {
        return DateTime::INVALID;
    };
    let next_start_year = if year_starts_on.get() > month {
        year
    } else {
        year + 1
    };
    DateTime::from_civil(next_start_year, year_starts_on.get(), MIN_DAY).checked_add_millis(-1)
}

/// The inclusive boundary pair of one custom year.
///
/// For a valid input instant, `start <= end`, `start` falls at 00:00:00.000,
/// and `end` is exactly one millisecond before the next custom year's start.
/// For an invalid input both bounds are the invalid sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearBounds {
    start: DateTime,
    end: DateTime,
}

/// Computes both boundaries of the custom year containing the given instant.
pub fn bounds_of_year(date: impl Into<DateTime>, year_starts_on: YearStart) -> YearBounds {
    let date = date.into();
    YearBounds {
        start: start_of_year(date, year_starts_on),
        end: end_of_year(date, year_starts_on),
    }
}

impl YearBounds {
    /// Returns the start boundary
    pub const fn start(&self) -> DateTime {
        self.start
    }

    /// Returns the end boundary
    pub const fn end(&self) -> DateTime {
        self.end
    }

    /// Returns both boundaries as a tuple
    pub const fn dates(&self) -> (DateTime, DateTime) {
        (self.start, self.end)
    }

    /// Whether both boundaries are representable instants
    pub const fn is_valid(&self) -> bool {
        self.start.is_valid() && self.end.is_valid()
    }

    /// Checks if the given instant falls within the bounds (inclusive).
    /// Always `false` when either bound or the probe is invalid.
    pub fn contains(&self, date: impl Into<DateTime>) -> bool {
        let (Some(start), Some(end), Some(at)) = (
            self.start.epoch_millis(),
            self.end.epoch_millis(),
            date.into().epoch_millis(),
        ) else {
            return false;
        };
        (start..=end).contains(&at)
    }
}
