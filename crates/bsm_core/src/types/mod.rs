//! Core financial and error types.
//!
//! This module provides:
//! - `option_type`: The call/put tag with its text parser
//! - `time`: ACT/365 day-count helpers
//! - `error`: Structured error types for the pricing boundary
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`] from `option_type`
//! - [`years_from_days`], [`year_fraction`], [`DAYS_PER_YEAR`] from `time`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option_type;
pub mod time;

pub use error::PricingError;
pub use option_type::OptionType;
pub use time::{year_fraction, years_from_days, DAYS_PER_YEAR};
