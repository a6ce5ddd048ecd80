//! Analytical pricing formulas for European options.
//!
//! This module provides the Black-Scholes-Merton closed form:
//! - Prices for calls and puts, with intrinsic value at expiry
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Batch evaluation across many spot levels
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: `f64` in production, `f32` where precision allows
//! - **Total functions**: expiry and zero volatility are limits, not errors
//! - **Exhaustive option types**: `OptionType` is a closed enum

pub mod batch;
pub mod black_scholes;
pub mod error;
pub mod greeks;

pub use batch::{greeks_batch, price_batch, valuation_batch};
pub use black_scholes::BlackScholes;
pub use error::AnalyticalError;
pub use greeks::{Greeks, Valuation};
