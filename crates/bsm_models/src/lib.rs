//! # BSM Models (L2: Analytics)
//!
//! Closed-form Black-Scholes-Merton prices and Greeks for European options.
//!
//! This crate provides:
//! - Scalar pricing and sensitivity functions (`price`, `delta`, `gamma`,
//!   `vega`, `theta`, `rho`) over canonical units
//! - A validated parameter set, [`analytical::BlackScholes`]
//! - Result types for Greeks and full valuations
//! - Rayon-backed batch evaluation across spot grids
//!
//! ## Conventions
//!
//! - Time to expiry in years, rate and volatility as decimals
//! - Vega per unit volatility (1.0 = 100 vol points)
//! - Theta per calendar day (annual theta / 365)
//! - Rho per 1% change in the rate
//!
//! ## Example
//!
//! ```
//! use bsm_models::analytical::black_scholes::{price, delta};
//! use bsm_core::types::OptionType;
//!
//! let call = price(100.0_f64, 105.0, 1.0, 0.05, 0.2, OptionType::Call);
//! assert!((call - 8.0214).abs() < 1e-3);
//!
//! let expired = delta(110.0_f64, 105.0, 0.0, 0.05, 0.2, OptionType::Put);
//! assert_eq!(expired, 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
