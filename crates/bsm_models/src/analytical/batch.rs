//! Rayon-based batch evaluation across spot levels.
//!
//! Each spot is evaluated independently with the remaining parameters held
//! fixed, which is how value curves are built. Output order matches input
//! order and every element equals the corresponding scalar call.
//!
//! Spot values are not validated; non-positive spots produce whatever the
//! closed form yields for them.

use bsm_core::types::OptionType;
use num_traits::Float;
use rayon::prelude::*;

use super::black_scholes::{greeks, price, BlackScholes};
use super::greeks::{Greeks, Valuation};

/// Prices one option across many spot levels in parallel.
///
/// # Examples
/// ```
/// use bsm_models::analytical::{price_batch, BlackScholes};
/// use bsm_core::types::OptionType;
///
/// let model = BlackScholes::new(100.0_f64, 100.0, 0.0, 0.05, 0.2).unwrap();
/// let prices = price_batch(&model, &[90.0, 100.0, 110.0], OptionType::Call);
/// assert_eq!(prices, vec![0.0, 0.0, 10.0]);
/// ```
pub fn price_batch<T>(model: &BlackScholes<T>, spots: &[T], option_type: OptionType) -> Vec<T>
where
    T: Float + Send + Sync,
{
    let (strike, expiry, rate, volatility) = contract_terms(model);
    spots
        .par_iter()
        .map(|&spot| price(spot, strike, expiry, rate, volatility, option_type))
        .collect()
}

/// Greeks for one option across many spot levels in parallel.
pub fn greeks_batch<T>(
    model: &BlackScholes<T>,
    spots: &[T],
    option_type: OptionType,
) -> Vec<Greeks<T>>
where
    T: Float + Send + Sync,
{
    let (strike, expiry, rate, volatility) = contract_terms(model);
    spots
        .par_iter()
        .map(|&spot| greeks(spot, strike, expiry, rate, volatility, option_type))
        .collect()
}

/// Full valuations for one option across many spot levels in parallel.
pub fn valuation_batch<T>(
    model: &BlackScholes<T>,
    spots: &[T],
    option_type: OptionType,
) -> Vec<Valuation<T>>
where
    T: Float + Send + Sync,
{
    let (strike, expiry, rate, volatility) = contract_terms(model);
    spots
        .par_iter()
        .map(|&spot| {
            Valuation::new(
                option_type,
                price(spot, strike, expiry, rate, volatility, option_type),
                option_type.intrinsic(spot, strike),
                greeks(spot, strike, expiry, rate, volatility, option_type),
            )
        })
        .collect()
}

#[inline]
fn contract_terms<T: Float>(model: &BlackScholes<T>) -> (T, T, T, T) {
    (
        model.strike(),
        model.expiry(),
        model.rate(),
        model.volatility(),
    )
}
