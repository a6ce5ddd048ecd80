//! Greeks and valuation result types.
//!
//! Provides [`Greeks<T>`], the five first/second-order sensitivities of a
//! European option, and [`Valuation<T>`], a price with its decomposition
//! into intrinsic and extrinsic value.

use bsm_core::types::OptionType;
use num_traits::Float;

/// Black-Scholes-Merton sensitivities.
///
/// Each field carries its own scaling:
///
/// - `delta`: ∂V/∂S, per unit of spot
/// - `gamma`: ∂²V/∂S², per unit of spot
/// - `vega`: ∂V/∂σ, per unit volatility (1.0 = 100 vol points)
/// - `theta`: −∂V/∂T, per calendar day
/// - `rho`: ∂V/∂r, per 1% rate change
///
/// # Examples
///
/// ```rust
/// use bsm_models::analytical::Greeks;
///
/// let greeks = Greeks {
///     delta: 0.54_f64,
///     gamma: 0.02,
///     vega: 39.67,
///     theta: -0.017,
///     rho: 0.46,
/// };
/// assert!((greeks.vega_per_vol_point() - 0.3967).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// Delta: ∂V/∂S (sensitivity to spot price).
    pub delta: T,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot).
    pub gamma: T,
    /// Vega: ∂V/∂σ per unit volatility.
    pub vega: T,
    /// Theta: time decay per calendar day.
    pub theta: T,
    /// Rho: ∂V/∂r per 1% rate change.
    pub rho: T,
}

impl<T: Float> Default for Greeks<T> {
    fn default() -> Self {
        Self {
            delta: T::zero(),
            gamma: T::zero(),
            vega: T::zero(),
            theta: T::zero(),
            rho: T::zero(),
        }
    }
}

impl<T: Float> Greeks<T> {
    /// Vega per 1 volatility point (vega / 100).
    #[inline]
    pub fn vega_per_vol_point(&self) -> T {
        self.vega / T::from(100.0).unwrap()
    }

    /// Returns true when every sensitivity is finite.
    pub fn is_finite(&self) -> bool {
        [self.delta, self.gamma, self.vega, self.theta, self.rho]
            .iter()
            .all(|g| g.is_finite())
    }
}

/// Price of one option together with its value decomposition and Greeks.
///
/// `extrinsic = price − intrinsic` is the time and volatility value; it is
/// the vertical gap between the value-today curve and the payoff at expiry.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valuation<T: Float> {
    /// Call or put.
    pub option_type: OptionType,
    /// Theoretical BSM price.
    pub price: T,
    /// Immediate exercise value at the current spot.
    pub intrinsic: T,
    /// Time and volatility value, `price − intrinsic`.
    pub extrinsic: T,
    /// Sensitivities at the current parameters.
    pub greeks: Greeks<T>,
}

impl<T: Float> Valuation<T> {
    /// Assembles a valuation, deriving the extrinsic value.
    pub fn new(option_type: OptionType, price: T, intrinsic: T, greeks: Greeks<T>) -> Self {
        Self {
            option_type,
            price,
            intrinsic,
            extrinsic: price - intrinsic,
            greeks,
        }
    }
}
