//! # bsm_core: Numeric Foundation for BSM Option Analytics
//!
//! ## Layer 1 (Foundation) Role
//!
//! bsm_core is the bottom layer of the workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - The closed `OptionType` tag and its text parser (`types::option_type`)
//! - Day-count helpers for converting calendar inputs into years (`types::time`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other bsm_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use bsm_core::math::distributions::{norm_cdf, norm_pdf};
//! use bsm_core::types::{years_from_days, OptionType};
//!
//! let kind: OptionType = "call".parse().unwrap();
//! assert!(kind.is_call());
//!
//! let expiry = years_from_days(182.5_f64);
//! assert!((expiry - 0.5).abs() < 1e-12);
//!
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
//! assert!(norm_pdf(0.0_f64) > 0.39);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionType`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

/// Generic floating-point trait used by every formula in the workspace.
///
/// Re-exported so downstream crates can write `T: bsm_core::Float` without
/// depending on num-traits directly.
pub use num_traits::Float;
