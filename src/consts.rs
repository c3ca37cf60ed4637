/// Highest valid year-start month index (December)
pub const MAX_YEAR_START: u8 = 11;

/// First day of month, used for year-start boundaries
pub const MIN_DAY: u8 = 1;

/// Month index for January (months are 0-indexed)
pub const JANUARY: u8 = 0;
/// Month index for February
pub const FEBRUARY: u8 = 1;
/// Month index for December
pub const DECEMBER: u8 = 11;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month, indexed by month index (0 = January)
/// February shows 28 days (non-leap, adjusted by the `is_leap_year` check)
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February (non-leap default)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Milliseconds per second
pub const MS_PER_SECOND: i64 = 1_000;
/// Milliseconds per minute
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
/// Milliseconds per hour
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// Milliseconds per civil day
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Largest representable distance from the epoch, in milliseconds
/// (100,000,000 days on either side of 1970-01-01T00:00:00.000).
/// Instants outside this envelope collapse to the invalid sentinel.
pub const MAX_INSTANT_MS: i64 = 100_000_000 * MS_PER_DAY;
