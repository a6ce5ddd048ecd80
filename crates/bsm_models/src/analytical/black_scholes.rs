//! Black-Scholes-Merton pricing for European options.
//!
//! This module provides closed-form prices and Greeks for European calls
//! and puts, as free functions over canonical units and as methods on the
//! validated parameter set [`BlackScholes`].
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) − K·e^(−rT)·N(d₂)
//! **Put Price**: P = K·e^(−rT)·N(−d₂) − S·N(−d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ − σ√T
//!
//! ## Boundaries
//!
//! With T ≤ 0 or σ ≤ 0 the moneyness terms are taken at their limit:
//! (+∞, +∞) when S > K and (−∞, −∞) otherwise, so N(d₁) and N(d₂)
//! collapse to 1 or 0. At T ≤ 0 the price is the intrinsic value and every
//! Greek other than delta is zero.

use bsm_core::math::distributions::{norm_cdf, norm_pdf};
use bsm_core::types::{OptionType, PricingError, DAYS_PER_YEAR};
use num_traits::Float;

use super::error::AnalyticalError;
use super::greeks::{Greeks, Valuation};

/// Scale from "per unit" to "per 1%" sensitivities.
const PER_PERCENT: f64 = 100.0;

/// d₁ and d₂, or their limits when T ≤ 0 or σ ≤ 0.
#[inline]
fn moneyness<T: Float>(spot: T, strike: T, expiry: T, rate: T, volatility: T) -> (T, T) {
    let zero = T::zero();

    if expiry <= zero || volatility <= zero {
        let limit = if spot > strike {
            T::infinity()
        } else {
            T::neg_infinity()
        };
        return (limit, limit);
    }

    let half = T::from(0.5).unwrap();
    let vol_sqrt_t = volatility * expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + half * volatility * volatility) * expiry) / vol_sqrt_t;

    (d1, d1 - vol_sqrt_t)
}

/// European option price.
///
/// - T ≤ 0: intrinsic value, regardless of volatility
/// - Call: S·N(d₁) − K·e^(−rT)·N(d₂)
/// - Put: K·e^(−rT)·N(−d₂) − S·N(−d₁)
///
/// The result is not clamped at zero.
///
/// # Examples
/// ```
/// use bsm_models::analytical::black_scholes::price;
/// use bsm_core::types::OptionType;
///
/// let put = price(100.0_f64, 105.0, 1.0, 0.05, 0.2, OptionType::Put);
/// assert!((put - 7.9004).abs() < 1e-3);
///
/// // Expiry overrides volatility
/// assert_eq!(price(100.0_f64, 105.0, 0.0, 0.05, 0.2, OptionType::Put), 5.0);
/// ```
#[inline]
pub fn price<T: Float>(
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
) -> T {
    if expiry <= T::zero() {
        return option_type.intrinsic(spot, strike);
    }

    let (d1, d2) = moneyness(spot, strike, expiry, rate, volatility);
    let discounted_strike = strike * (-rate * expiry).exp();

    match option_type {
        OptionType::Call => spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        OptionType::Put => discounted_strike * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}

/// Price with the option type given as text.
///
/// Entry point for callers that still carry the type as a string; the
/// text is parsed before any arithmetic.
///
/// # Errors
/// `PricingError::InvalidOptionType` unless the text names a call or a put.
///
/// # Examples
/// ```
/// use bsm_models::analytical::black_scholes::price_named;
///
/// assert!(price_named(100.0_f64, 105.0, 1.0, 0.05, 0.2, "call").is_ok());
/// assert!(price_named(100.0_f64, 105.0, 1.0, 0.05, 0.2, "straddle").is_err());
/// ```
pub fn price_named<T: Float>(
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: &str,
) -> Result<T, PricingError> {
    let option_type: OptionType = option_type.parse()?;
    Ok(price(spot, strike, expiry, rate, volatility, option_type))
}

/// Delta (∂V/∂S).
///
/// - T ≤ 0: call 1 if S > K else 0; put −1 if S < K else 0
/// - Call: N(d₁)
/// - Put: N(d₁) − 1
#[inline]
pub fn delta<T: Float>(
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
) -> T {
    let one = T::one();
    let zero = T::zero();

    if expiry <= zero {
        return match option_type {
            OptionType::Call if spot > strike => one,
            OptionType::Put if spot < strike => -one,
            _ => zero,
        };
    }

    let (d1, _) = moneyness(spot, strike, expiry, rate, volatility);
    match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - one,
    }
}

/// Gamma (∂²V/∂S²), identical for calls and puts.
///
/// φ(d₁) / (S·σ·√T), and zero when T ≤ 0 or σ ≤ 0.
#[inline]
pub fn gamma<T: Float>(spot: T, strike: T, expiry: T, rate: T, volatility: T) -> T {
    let zero = T::zero();
    if expiry <= zero || volatility <= zero {
        return zero;
    }

    let (d1, _) = moneyness(spot, strike, expiry, rate, volatility);
    norm_pdf(d1) / (spot * volatility * expiry.sqrt())
}

/// Vega (∂V/∂σ) per unit volatility, identical for calls and puts.
///
/// S·φ(d₁)·√T, and zero when T ≤ 0 or σ ≤ 0. Divide by 100 for the
/// change per volatility point.
#[inline]
pub fn vega<T: Float>(spot: T, strike: T, expiry: T, rate: T, volatility: T) -> T {
    let zero = T::zero();
    if expiry <= zero || volatility <= zero {
        return zero;
    }

    let (d1, _) = moneyness(spot, strike, expiry, rate, volatility);
    spot * norm_pdf(d1) * expiry.sqrt()
}

/// Theta per calendar day.
///
/// - Call: (−(S·φ(d₁)·σ)/(2√T) − r·K·e^(−rT)·N(d₂)) / 365
/// - Put: (−(S·φ(d₁)·σ)/(2√T) + r·K·e^(−rT)·N(−d₂)) / 365
///
/// Zero when T ≤ 0.
#[inline]
pub fn theta<T: Float>(
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
) -> T {
    if expiry <= T::zero() {
        return T::zero();
    }

    let (d1, d2) = moneyness(spot, strike, expiry, rate, volatility);
    let two = T::from(2.0).unwrap();
    let carry = rate * strike * (-rate * expiry).exp();

    // Volatility decay, common to both sides
    let decay = -(spot * norm_pdf(d1) * volatility) / (two * expiry.sqrt());

    let annual = match option_type {
        OptionType::Call => decay - carry * norm_cdf(d2),
        OptionType::Put => decay + carry * norm_cdf(-d2),
    };
    annual / T::from(DAYS_PER_YEAR).unwrap()
}

/// Rho per 1% change in the risk-free rate.
///
/// - Call: K·T·e^(−rT)·N(d₂) / 100
/// - Put: −K·T·e^(−rT)·N(−d₂) / 100
///
/// Zero when T ≤ 0.
#[inline]
pub fn rho<T: Float>(
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
) -> T {
    if expiry <= T::zero() {
        return T::zero();
    }

    let (_, d2) = moneyness(spot, strike, expiry, rate, volatility);
    let exposure = strike * expiry * (-rate * expiry).exp();

    let per_unit = match option_type {
        OptionType::Call => exposure * norm_cdf(d2),
        OptionType::Put => -exposure * norm_cdf(-d2),
    };
    per_unit / T::from(PER_PERCENT).unwrap()
}

/// All five Greeks for one option.
#[inline]
pub fn greeks<T: Float>(
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
) -> Greeks<T> {
    Greeks {
        delta: delta(spot, strike, expiry, rate, volatility, option_type),
        gamma: gamma(spot, strike, expiry, rate, volatility),
        vega: vega(spot, strike, expiry, rate, volatility),
        theta: theta(spot, strike, expiry, rate, volatility, option_type),
        rho: rho(spot, strike, expiry, rate, volatility, option_type),
    }
}

/// Validated Black-Scholes-Merton parameter set.
///
/// Holds (S, K, T, r, σ) in canonical units; the option type is chosen per
/// call so one parameter set prices both sides.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use bsm_models::analytical::BlackScholes;
/// use bsm_core::types::OptionType;
///
/// let bs = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let call = bs.price(OptionType::Call);
/// let put = bs.price(OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Strike price (K)
    strike: T,
    /// Time to expiry in years (T)
    expiry: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a validated parameter set.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiry in years (must be non-negative)
    /// * `rate` - Annualised risk-free rate as a decimal (must be finite)
    /// * `volatility` - Annualised volatility as a decimal (must be non-negative)
    ///
    /// # Errors
    /// The matching `AnalyticalError` variant for the first parameter outside
    /// its domain. NaN and infinities are rejected everywhere.
    ///
    /// # Examples
    /// ```
    /// use bsm_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 105.0, 0.0, 0.05, 0.0).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 105.0, 1.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 105.0, -1.0, 0.05, 0.2).is_err());
    /// ```
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
    ) -> Result<Self, AnalyticalError> {
        let zero = T::zero();
        let as_f64 = |x: T| x.to_f64().unwrap_or(f64::NAN);

        if !(spot > zero && spot.is_finite()) {
            return Err(AnalyticalError::InvalidSpot { spot: as_f64(spot) });
        }
        if !(strike > zero && strike.is_finite()) {
            return Err(AnalyticalError::InvalidStrike {
                strike: as_f64(strike),
            });
        }
        if !(expiry >= zero && expiry.is_finite()) {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: as_f64(expiry),
            });
        }
        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate: as_f64(rate) });
        }
        if !(volatility >= zero && volatility.is_finite()) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: as_f64(volatility),
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Same contract and market, different spot.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidSpot` if `spot` is not positive and finite.
    pub fn with_spot(&self, spot: T) -> Result<Self, AnalyticalError> {
        Self::new(spot, self.strike, self.expiry, self.rate, self.volatility)
    }

    /// Returns true once the option has reached expiry (T = 0).
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expiry <= T::zero()
    }

    /// Theoretical price. See [`price`].
    #[inline]
    pub fn price(&self, option_type: OptionType) -> T {
        price(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            option_type,
        )
    }

    /// Delta. See [`delta`].
    #[inline]
    pub fn delta(&self, option_type: OptionType) -> T {
        delta(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            option_type,
        )
    }

    /// Gamma. See [`gamma`].
    #[inline]
    pub fn gamma(&self) -> T {
        gamma(self.spot, self.strike, self.expiry, self.rate, self.volatility)
    }

    /// Vega per unit volatility. See [`vega`].
    #[inline]
    pub fn vega(&self) -> T {
        vega(self.spot, self.strike, self.expiry, self.rate, self.volatility)
    }

    /// Theta per calendar day. See [`theta`].
    #[inline]
    pub fn theta(&self, option_type: OptionType) -> T {
        theta(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            option_type,
        )
    }

    /// Rho per 1% rate change. See [`rho`].
    #[inline]
    pub fn rho(&self, option_type: OptionType) -> T {
        rho(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            option_type,
        )
    }

    /// All five Greeks.
    #[inline]
    pub fn greeks(&self, option_type: OptionType) -> Greeks<T> {
        greeks(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            option_type,
        )
    }

    /// Intrinsic value at the current spot.
    #[inline]
    pub fn intrinsic(&self, option_type: OptionType) -> T {
        option_type.intrinsic(self.spot, self.strike)
    }

    /// Price, intrinsic/extrinsic split and Greeks in one result.
    pub fn valuation(&self, option_type: OptionType) -> Valuation<T> {
        Valuation::new(
            option_type,
            self.price(option_type),
            self.intrinsic(option_type),
            self.greeks(option_type),
        )
    }
}
