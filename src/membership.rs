use std::time::{SystemTime, UNIX_EPOCH};

use crate::{DateTime, YearStart, bounds_of_year, start_of_year};

/// Error type for year-membership preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MembershipError {
    /// The year-start month falls after the reference date's own month.
    /// Call sites of the range-membership test treat this as a usage error,
    /// not as data.
    #[error("Year start month {year_starts_on} is after the reference date's month {reference_month}")]
    StartAfterReference {
        year_starts_on: u8,
        reference_month: u8,
    },
}

/// Are the two instants in the same custom year?
///
/// Boundary-equality semantics: both start boundaries are computed under the
/// given year start and the test compares their calendar years. Symmetric in
/// its arguments. If either instant is invalid the result is `false`.
pub fn is_same_year(
    left: impl Into<DateTime>,
    right: impl Into<DateTime>,
    year_starts_on: YearStart,
) -> bool {
    let left_start = start_of_year(left, year_starts_on);
    let right_start = start_of_year(right, year_starts_on);
    match (left_start.year(), right_start.year()) {
        (Some(left_year), Some(right_year)) => left_year == right_year,
        _ => false,
    }
}

/// Does `probe` fall in the custom year containing `reference`?
///
/// Range-membership semantics: the boundary pair is derived from `reference`
/// and `probe` is tested against it inclusively, so the test is asymmetric.
/// If `reference` or `probe` is invalid the result is `Ok(false)`.
///
/// # Errors
/// Returns [`MembershipError::StartAfterReference`] if the year-start month
/// is strictly after `reference`'s month. The precondition is only checkable
/// for a valid reference.
pub fn in_year_of(
    reference: impl Into<DateTime>,
    probe: impl Into<DateTime>,
    year_starts_on: YearStart,
) -> Result<bool, MembershipError> {
    let reference = reference.into();
    let Some(reference_month) = reference.month() else {
        return Ok(false);
    };
    if year_starts_on.get() > reference_month {
        return Err(MembershipError::StartAfterReference {
            year_starts_on: year_starts_on.get(),
            reference_month,
        });
    }
    Ok(bounds_of_year(reference, year_starts_on).contains(probe))
}

/// A source of the current instant.
///
/// The clock is inherently impure, so it stays outside the pure core and is
/// injected. Implementations must sample on every `now` call, never memoize.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime;
}

/// The process-wide system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        let millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            Err(before_epoch) => {
                i64::try_from(before_epoch.duration().as_millis()).map_or(i64::MIN, |ms| -ms)
            }
        };
        DateTime::from_epoch_millis(millis)
    }
}

/// Is the given instant in the same custom year as `clock`'s current
/// instant? The clock is sampled exactly once per call.
pub fn is_this_year_with(
    date: impl Into<DateTime>,
    year_starts_on: YearStart,
    clock: &impl Clock,
) -> bool {
    is_same_year(date, clock.now(), year_starts_on)
}

/// Is the given instant in the same custom year as now, per the system
/// clock? An invalid instant yields `false`.
pub fn is_this_year(date: impl Into<DateTime>, year_starts_on: YearStart) -> bool {
    is_this_year_with(date, year_starts_on, &SystemClock)
}
