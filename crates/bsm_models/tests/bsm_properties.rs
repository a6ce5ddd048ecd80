//! Property and reference tests for the Black-Scholes-Merton analytics.
//!
//! # Test Categories
//!
//! 1. **Reference scenario**: S=100, K=105, T=1, r=5%, σ=20%
//! 2. **Expiry collapse**: T = 0 prices and Greeks
//! 3. **Limits**: deep in/out of the money deltas
//! 4. **Properties**: parity, monotonicity, bounds, call/put symmetry

use approx::assert_relative_eq;
use bsm_core::types::{OptionType, PricingError};
use bsm_models::analytical::black_scholes::{
    delta, gamma, greeks, price, price_named, rho, theta, vega,
};
use proptest::prelude::*;

const CALL: OptionType = OptionType::Call;
const PUT: OptionType = OptionType::Put;

/// Standard test parameters: (spot, strike, expiry, rate, vol).
fn reference_params() -> (f64, f64, f64, f64, f64) {
    (100.0, 105.0, 1.0, 0.05, 0.2)
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_reference_scenario_prices() {
    let (s, k, t, r, v) = reference_params();
    assert_relative_eq!(price(s, k, t, r, v, CALL), 8.0214, epsilon = 1e-4);
    assert_relative_eq!(price(s, k, t, r, v, PUT), 7.9004, epsilon = 1e-4);
}

#[test]
fn test_reference_scenario_greeks() {
    let (s, k, t, r, v) = reference_params();
    let g = greeks(s, k, t, r, v, CALL);

    assert_relative_eq!(g.delta, 0.5422, epsilon = 1e-4);
    assert_relative_eq!(g.gamma, 0.019835, epsilon = 1e-6);
    assert_relative_eq!(g.vega, 39.6705, epsilon = 1e-4);
    assert_relative_eq!(g.vega_per_vol_point(), 0.396705, epsilon = 1e-6);
    assert_relative_eq!(g.theta, -0.017198, epsilon = 1e-6);
    assert_relative_eq!(g.rho, 0.462015, epsilon = 1e-5);
}

#[test]
fn test_invalid_type_is_rejected() {
    let (s, k, t, r, v) = reference_params();
    let err = price_named(s, k, t, r, v, "straddle").unwrap_err();
    assert_eq!(err, PricingError::InvalidOptionType("straddle".to_string()));
}

// ============================================================================
// Expiry Collapse
// ============================================================================

#[test]
fn test_expiry_collapse() {
    let k = 100.0;
    for s in [50.0, 99.0, 100.0, 101.0, 150.0] {
        assert_eq!(price(s, k, 0.0, 0.05, 0.2, CALL), f64::max(0.0, s - k));
        assert_eq!(price(s, k, 0.0, 0.05, 0.2, PUT), f64::max(0.0, k - s));

        assert_eq!(delta(s, k, 0.0, 0.05, 0.2, CALL), if s > k { 1.0 } else { 0.0 });
        assert_eq!(delta(s, k, 0.0, 0.05, 0.2, PUT), if s < k { -1.0 } else { 0.0 });

        assert_eq!(gamma(s, k, 0.0, 0.05, 0.2), 0.0);
        assert_eq!(vega(s, k, 0.0, 0.05, 0.2), 0.0);
        for kind in OptionType::ALL {
            assert_eq!(theta(s, k, 0.0, 0.05, 0.2, kind), 0.0);
            assert_eq!(rho(s, k, 0.0, 0.05, 0.2, kind), 0.0);
        }
    }
}

// ============================================================================
// Deep ITM/OTM Limits
// ============================================================================

#[test]
fn test_delta_limits_in_spot() {
    let (_, k, t, r, v) = reference_params();

    assert_relative_eq!(delta(1e6, k, t, r, v, CALL), 1.0, epsilon = 1e-12);
    assert_relative_eq!(delta(1e6, k, t, r, v, PUT), 0.0, epsilon = 1e-12);

    assert_relative_eq!(delta(1e-6, k, t, r, v, CALL), 0.0, epsilon = 1e-12);
    assert_relative_eq!(delta(1e-6, k, t, r, v, PUT), -1.0, epsilon = 1e-12);
}

// ============================================================================
// Property-based Tests
// ============================================================================

fn market() -> impl Strategy<Value = (f64, f64, f64, f64, f64)> {
    (
        10.0_f64..500.0, // spot
        10.0_f64..500.0, // strike
        0.01_f64..5.0,   // expiry
        -0.02_f64..0.2,  // rate
        0.05_f64..1.0,   // volatility
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_put_call_parity((s, k, t, r, v) in market()) {
        let parity = price(s, k, t, r, v, CALL) - price(s, k, t, r, v, PUT);
        let forward = s - k * (-r * t).exp();
        prop_assert!((parity - forward).abs() < 1e-6, "parity gap {}", parity - forward);
    }

    #[test]
    fn prop_price_monotone_in_spot((s, k, t, r, v) in market(), bump in 1.0_f64..1.5) {
        let higher = s * bump;
        prop_assert!(price(higher, k, t, r, v, CALL) >= price(s, k, t, r, v, CALL) - 1e-12);
        prop_assert!(price(higher, k, t, r, v, PUT) <= price(s, k, t, r, v, PUT) + 1e-12);
    }

    #[test]
    fn prop_delta_bounds((s, k, t, r, v) in market()) {
        let call = delta(s, k, t, r, v, CALL);
        let put = delta(s, k, t, r, v, PUT);
        prop_assert!((0.0..=1.0).contains(&call));
        prop_assert!((-1.0..=0.0).contains(&put));
    }

    #[test]
    fn prop_gamma_vega_non_negative_and_type_free((s, k, t, r, v) in market()) {
        let call = greeks(s, k, t, r, v, CALL);
        let put = greeks(s, k, t, r, v, PUT);
        prop_assert!(call.gamma >= 0.0);
        prop_assert!(call.vega >= 0.0);
        prop_assert_eq!(call.gamma, put.gamma);
        prop_assert_eq!(call.vega, put.vega);
    }

    #[test]
    fn prop_expired_price_is_intrinsic(s in 1.0_f64..500.0, k in 1.0_f64..500.0, v in 0.0_f64..1.0) {
        prop_assert_eq!(price(s, k, 0.0, 0.05, v, CALL), (s - k).max(0.0));
        prop_assert_eq!(price(s, k, 0.0, 0.05, v, PUT), (k - s).max(0.0));
    }
}
