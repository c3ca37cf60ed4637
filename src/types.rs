use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_YEAR_START,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error type for year-start month resolution.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum YearStartError {
    /// The supplied value did not resolve to an integer in `0..=MAX_YEAR_START`.
    /// A non-numeric value (NaN, infinity) is out of range, never defaulted.
    #[display(fmt = "Invalid year start month: {} (must be 0-{})", "_0", MAX_YEAR_START)]
    OutOfRange(String),
}

impl std::error::Error for YearStartError {}

/// The month index at which a custom year begins, guaranteed to be in the
/// range `0..=MAX_YEAR_START` (0 = January, 11 = December).
///
/// The default is January, matching the civil calendar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct YearStart(u8);

impl YearStart {
    /// January start, the civil-calendar default.
    pub const JANUARY: Self = Self(0);

    /// Creates a new `YearStart`, validating that it's <= `MAX_YEAR_START`.
    ///
    /// # Errors
    /// Returns `YearStartError::OutOfRange` if the value is > `MAX_YEAR_START`.
    pub fn new(value: u8) -> Result<Self, YearStartError> {
        if value > MAX_YEAR_START {
            return Err(YearStartError::OutOfRange(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Coerces an arbitrary numeric value into a `YearStart`.
    ///
    /// This is the total coercion used for loosely-typed configuration:
    /// the value is truncated toward zero, then range-checked. NaN and
    /// infinities have no integer value and are therefore out of range.
    ///
    /// # Errors
    /// Returns `YearStartError::OutOfRange` if the value is non-finite or
    /// truncates outside `0..=MAX_YEAR_START`.
    pub fn coerce(value: f64) -> Result<Self, YearStartError> {
        if !value.is_finite() {
            return Err(YearStartError::OutOfRange(value.to_string()));
        }
        let truncated = value.trunc();
        if truncated < 0.0 || truncated > f64::from(MAX_YEAR_START) {
            return Err(YearStartError::OutOfRange(value.to_string()));
        }
        // Exact cast: truncated is an integer in 0..=11
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = truncated as u8;
        Ok(Self(month))
    }

    /// Returns the month index as u8 (0 = January)
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for YearStart {
    type Error = YearStartError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f64> for YearStart {
    type Error = YearStartError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::coerce(value)
    }
}

impl From<YearStart> for u8 {
    fn from(start: YearStart) -> Self {
        start.0
    }
}

impl fmt::Display for YearStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in the given month, by month index (0 = January).
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month <= DECEMBER);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_start_new_valid() {
        for m in 0..=11 {
            assert!(YearStart::new(m).is_ok(), "Year start {m} should be valid");
        }
    }

    #[test]
    fn test_year_start_new_invalid_too_large() {
        let result = YearStart::new(12);
        assert!(matches!(result, Err(YearStartError::OutOfRange(_))));

        let result = YearStart::new(255);
        assert!(matches!(result, Err(YearStartError::OutOfRange(_))));
    }

    #[test]
    fn test_year_start_default_is_january() {
        assert_eq!(YearStart::default(), YearStart::JANUARY);
        assert_eq!(YearStart::default().get(), 0);
    }

    #[test]
    fn test_year_start_get() {
        let start = YearStart::new(8).unwrap();
        assert_eq!(start.get(), 8);
    }

    #[test]
    fn test_year_start_display() {
        let start = YearStart::new(8).unwrap();
        assert_eq!(start.to_string(), "8");
    }

    #[test]
    fn test_year_start_coerce_integral() {
        assert_eq!(YearStart::coerce(0.0).unwrap().get(), 0);
        assert_eq!(YearStart::coerce(1.0).unwrap().get(), 1);
        assert_eq!(YearStart::coerce(11.0).unwrap().get(), 11);
    }

    #[test]
    fn test_year_start_coerce_truncates_toward_zero() {
        assert_eq!(YearStart::coerce(11.9).unwrap().get(), 11);
        assert_eq!(YearStart::coerce(3.5).unwrap().get(), 3);
        // -0.5 truncates to 0, which is in range
        assert_eq!(YearStart::coerce(-0.5).unwrap().get(), 0);
    }

    #[test]
    fn test_year_start_coerce_out_of_range() {
        assert!(matches!(
            YearStart::coerce(12.0),
            Err(YearStartError::OutOfRange(_))
        ));
        assert!(matches!(
            YearStart::coerce(-1.0),
            Err(YearStartError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_year_start_coerce_nan_is_out_of_range() {
        let result = YearStart::coerce(f64::NAN);
        assert!(matches!(result, Err(YearStartError::OutOfRange(_))));
    }

    #[test]
    fn test_year_start_coerce_infinity_is_out_of_range() {
        assert!(YearStart::coerce(f64::INFINITY).is_err());
        assert!(YearStart::coerce(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_year_start_try_from_u8() {
        let start: YearStart = 8u8.try_into().unwrap();
        assert_eq!(start.get(), 8);

        let result: Result<YearStart, _> = 12u8.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_start_into_u8() {
        let start = YearStart::new(8).unwrap();
        let value: u8 = start.into();
        assert_eq!(value, 8);
    }

    #[test]
    fn test_year_start_ordering() {
        let s1 = YearStart::new(3).unwrap();
        let s2 = YearStart::new(8).unwrap();
        assert!(s1 < s2);
        assert!(s2 > s1);
        assert_eq!(s1, s1);
    }

    #[test]
    fn test_year_start_serde() {
        let start = YearStart::new(8).unwrap();
        let json = serde_json::to_string(&start).unwrap();
        assert_eq!(json, "8");

        let parsed: YearStart = serde_json::from_str(&json).unwrap();
        assert_eq!(start, parsed);
    }

    #[test]
    fn test_year_start_serde_validation() {
        let result: Result<YearStart, _> = serde_json::from_str("12");
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display_mentions_value() {
        let err = YearStart::new(12).unwrap_err();
        assert_eq!(err.to_string(), "Invalid year start month: 12 (must be 0-11)");

        let err = YearStart::coerce(f64::NAN).unwrap_err();
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2021,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 4,
                is_leap: true,
                description: "early AD year divisible by 4",
            },
            TestCase {
                year: -4,
                is_leap: true,
                description: "proleptic year divisible by 4",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_month_31_day_months() {
        for month in [0, 2, 4, 6, 7, 9, 11] {
            assert_eq!(
                days_in_month(2024, month),
                31,
                "Month index {month} should have 31 days"
            );
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for month in [3, 5, 8, 10] {
            assert_eq!(
                days_in_month(2024, month),
                30,
                "Month index {month} should have 30 days"
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, FEBRUARY), 28);
        assert_eq!(days_in_month(2024, FEBRUARY), 29);
        assert_eq!(days_in_month(1900, FEBRUARY), 28, "Century not divisible by 400");
        assert_eq!(days_in_month(2000, FEBRUARY), 29, "Century divisible by 400");
    }
}
