mod boundary;
mod consts;
mod membership;
mod prelude;
mod types;

pub use boundary::{YearBounds, bounds_of_year, end_of_year, start_of_year};
pub use consts::*;
pub use membership::{
    Clock, MembershipError, SystemClock, in_year_of, is_same_year, is_this_year, is_this_year_with,
};
pub use types::{YearStart, YearStartError};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use types::days_in_month;

/// An absolute instant in the proleptic Gregorian civil calendar, stored as
/// milliseconds since 1970-01-01T00:00:00.000, or the invalid sentinel.
///
/// The sentinel stands in for unparseable or out-of-range instants. It never
/// causes an error by itself: every instant-returning operation applied to it
/// yields the sentinel again, and every boolean comparison involving it is
/// `false`. Malformed configuration, by contrast, errors immediately (see
/// [`YearStart`]).
///
/// Instants further than 100,000,000 days from the epoch are not
/// representable and collapse to the sentinel on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime(Option<i64>);

/// Civil-calendar decomposition of a valid instant.
#[derive(Debug, Clone, Copy)]
struct Civil {
    year: i32,
    /// Month index, 0 = January
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
}

// --- civil day arithmetic ---
//
// Era-based conversion between day counts and civil dates. Years are grouped
// into 400-year eras of exactly 146097 days, with the internal year starting
// in March so the leap day is the last day of the shifted year.

const YEARS_PER_ERA: i64 = 400;
const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01
const EPOCH_DAY_SHIFT: i64 = 719_468;

/// Day count since the epoch for a civil date. `month` is 1-based here.
const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let shifted_year = if month <= 2 { year - 1 } else { year };
    let era = shifted_year.div_euclid(YEARS_PER_ERA);
    let year_of_era = shifted_year - era * YEARS_PER_ERA;
    let shifted_month = (month + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - EPOCH_DAY_SHIFT
}

/// Civil date for a day count since the epoch. Returns a 0-based month index.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let shifted = days + EPOCH_DAY_SHIFT;
    let era = shifted.div_euclid(DAYS_PER_ERA);
    let day_of_era = shifted - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let shifted_year = year_of_era + era * YEARS_PER_ERA;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = if month <= 2 {
        shifted_year + 1
    } else {
        shifted_year
    };
    (year, (month - 1) as u8, day as u8)
}

impl DateTime {
    /// The invalid sentinel ("not a time").
    pub const INVALID: Self = Self(None);

    /// Creates an instant from epoch milliseconds.
    /// Values outside the representable envelope yield the invalid sentinel.
    pub const fn from_epoch_millis(millis: i64) -> Self {
        // checked_abs: i64::MIN has no absolute value and lies outside the
        // envelope anyway
        let Some(distance) = millis.checked_abs() else {
            return Self::INVALID;
        };
        if distance > MAX_INSTANT_MS {
            return Self::INVALID;
        }
        Self(Some(millis))
    }

    /// Creates the first instant (00:00:00.000) of a civil date.
    /// `month` is a 0-based index (0 = January).
    pub fn from_civil(year: i32, month: u8, day: u8) -> Self {
        Self::from_civil_time(year, month, day, 0, 0, 0, 0)
    }

    /// Creates an instant from full civil fields.
    /// `month` is a 0-based index (0 = January), `day` is 1-based.
    ///
    /// Out-of-range fields yield the invalid sentinel rather than an error:
    /// a malformed instant is data, not configuration.
    pub fn from_civil_time(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Self {
        if month > DECEMBER
            || !(MIN_DAY..=days_in_month(year, month)).contains(&day)
            || hour >= 24
            || minute >= 60
            || second >= 60
            || millisecond >= 1000
        {
            return Self::INVALID;
        }
        let days = days_from_civil(i64::from(year), i64::from(month) + 1, i64::from(day));
        let time_of_day = i64::from(hour) * MS_PER_HOUR
            + i64::from(minute) * MS_PER_MINUTE
            + i64::from(second) * MS_PER_SECOND
            + i64::from(millisecond);
        days.checked_mul(MS_PER_DAY)
            .and_then(|ms| ms.checked_add(time_of_day))
            .map_or(Self::INVALID, Self::from_epoch_millis)
    }

    /// Whether this is a representable instant (not the sentinel).
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0.is_some()
    }

    /// Epoch milliseconds, or `None` for the sentinel.
    #[inline]
    pub const fn epoch_millis(self) -> Option<i64> {
        self.0
    }

    /// Shifts the instant by a signed number of milliseconds.
    /// The sentinel propagates, and results outside the representable
    /// envelope collapse to it.
    pub fn checked_add_millis(self, delta: i64) -> Self {
        self.0
            .and_then(|ms| ms.checked_add(delta))
            .map_or(Self::INVALID, Self::from_epoch_millis)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn civil(self) -> Option<Civil> {
        let millis = self.0?;
        let days = millis.div_euclid(MS_PER_DAY);
        let time_of_day = millis.rem_euclid(MS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        Some(Civil {
            // |days| <= 100,000,000 keeps the year well inside i32
            year: year as i32,
            month,
            day,
            hour: (time_of_day / MS_PER_HOUR) as u8,
            minute: (time_of_day / MS_PER_MINUTE % 60) as u8,
            second: (time_of_day / MS_PER_SECOND % 60) as u8,
            millisecond: (time_of_day % MS_PER_SECOND) as u16,
        })
    }

    /// Civil year, or `None` for the sentinel.
    pub fn year(self) -> Option<i32> {
        Some(self.civil()?.year)
    }

    /// Month index (0 = January), or `None` for the sentinel.
    pub fn month(self) -> Option<u8> {
        Some(self.civil()?.month)
    }

    /// Day of month (1-based), or `None` for the sentinel.
    pub fn day(self) -> Option<u8> {
        Some(self.civil()?.day)
    }

    /// Hour of day, or `None` for the sentinel.
    pub fn hour(self) -> Option<u8> {
        Some(self.civil()?.hour)
    }

    /// Minute of hour, or `None` for the sentinel.
    pub fn minute(self) -> Option<u8> {
        Some(self.civil()?.minute)
    }

    /// Second of minute, or `None` for the sentinel.
    pub fn second(self) -> Option<u8> {
        Some(self.civil()?.second)
    }

    /// Millisecond of second, or `None` for the sentinel.
    pub fn millisecond(self) -> Option<u16> {
        Some(self.civil()?.millisecond)
    }
}

impl From<i64> for DateTime {
    fn from(millis: i64) -> Self {
        Self::from_epoch_millis(millis)
    }
}

impl PartialOrd for DateTime {
    /// Instants order by their position on the time line. The sentinel has
    /// no position: comparing it with a valid instant is undefined (`None`),
    /// while two sentinels are equal, consistent with `PartialEq`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Epoch milliseconds; the sentinel serializes as null
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let millis = Option::<i64>::deserialize(deserializer)?;
        Ok(millis.map_or(Self::INVALID, Self::from_epoch_millis))
    }
}
