//! Day-count helpers.
//!
//! The pricing formulas take time to expiry in years. Calendar inputs are
//! converted with the ACT/365 Fixed convention: a count of calendar days
//! divided by 365, regardless of leap years.
//!
//! ```
//! use bsm_core::types::time::{days_until, year_fraction, years_from_days};
//! use chrono::NaiveDate;
//!
//! assert_eq!(years_from_days(365.0_f64), 1.0);
//!
//! let valuation = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let expiry = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! assert_eq!(days_until(valuation, expiry), 366);
//! assert!((year_fraction(valuation, expiry) - 1.0027).abs() < 1e-3);
//! ```

use chrono::NaiveDate;
use num_traits::Float;

/// Calendar days per year under ACT/365 Fixed.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Converts a number of calendar days to years (days / 365).
#[inline]
pub fn years_from_days<T: Float>(days: T) -> T {
    days / T::from(DAYS_PER_YEAR).unwrap()
}

/// Signed number of calendar days from `start` to `end`.
#[inline]
pub fn days_until(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// ACT/365 year fraction from `start` to `end`.
///
/// Negative when `end` precedes `start`; such an expiry is treated by the
/// pricing formulas as already expired.
#[inline]
pub fn year_fraction(start: NaiveDate, end: NaiveDate) -> f64 {
    years_from_days(days_until(start, end) as f64)
}
