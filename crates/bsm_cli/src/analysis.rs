//! Dashboard analysis: current valuations, value curves and breakevens.

use bsm_core::types::OptionType;
use bsm_models::analytical::{price_batch, BlackScholes, Valuation};
use serde::Serialize;
use tracing::debug;

use crate::config::CurveConfig;

/// Evenly spaced spots from `lower * strike` to `upper * strike` inclusive.
///
/// Returns an empty grid when `points` is zero and the lower end alone when
/// it is one.
pub fn spot_grid(strike: f64, lower: f64, upper: f64, points: usize) -> Vec<f64> {
    let start = lower * strike;
    let end = upper * strike;
    match points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Call and put valuations at the current inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub spot: f64,
    pub strike: f64,
    pub expiry: f64,
    pub rate: f64,
    pub volatility: f64,
    pub call: Valuation<f64>,
    pub put: Valuation<f64>,
}

impl DashboardSummary {
    pub fn new(model: &BlackScholes<f64>) -> Self {
        Self {
            spot: model.spot(),
            strike: model.strike(),
            expiry: model.expiry(),
            rate: model.rate(),
            volatility: model.volatility(),
            call: model.valuation(OptionType::Call),
            put: model.valuation(OptionType::Put),
        }
    }

    /// Valuation for one side.
    pub fn valuation(&self, option_type: OptionType) -> &Valuation<f64> {
        match option_type {
            OptionType::Call => &self.call,
            OptionType::Put => &self.put,
        }
    }
}

/// One row of a value curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub spot: f64,
    /// Theoretical value today.
    pub value: f64,
    /// Profit or loss at expiry for a holder who paid today's premium.
    pub pnl_at_expiry: f64,
}

/// Value today and payoff at expiry across a spot grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueCurve {
    pub option_type: OptionType,
    pub strike: f64,
    /// Current spot, where the premium was struck.
    pub spot: f64,
    /// Price at the current spot, paid to enter the position.
    pub premium: f64,
    pub breakeven: f64,
    pub points: Vec<CurvePoint>,
}

impl ValueCurve {
    /// Builds the curve for `option_type` over the configured spot grid.
    pub fn build(model: &BlackScholes<f64>, option_type: OptionType, curve: &CurveConfig) -> Self {
        let strike = model.strike();
        let premium = model.price(option_type);
        let spots = spot_grid(strike, curve.lower, curve.upper, curve.points);
        let values = price_batch(model, &spots, option_type);

        debug!(
            option_type = %option_type,
            points = spots.len(),
            premium,
            "Built value curve"
        );

        let points = spots
            .iter()
            .zip(values)
            .map(|(&spot, value)| CurvePoint {
                spot,
                value,
                pnl_at_expiry: option_type.intrinsic(spot, strike) - premium,
            })
            .collect();

        Self {
            option_type,
            strike,
            spot: model.spot(),
            premium,
            breakeven: breakeven(option_type, strike, premium),
            points,
        }
    }
}

/// Spot at expiry where the position neither gains nor loses.
pub fn breakeven(option_type: OptionType, strike: f64, premium: f64) -> f64 {
    option_type.breakeven(strike, premium)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> BlackScholes<f64> {
        BlackScholes::new(100.0, 105.0, 1.0, 0.05, 0.2).unwrap()
    }

    #[test]
    fn test_spot_grid_endpoints() {
        let grid = spot_grid(105.0, 0.7, 1.3, 100);
        assert_eq!(grid.len(), 100);
        assert_relative_eq!(grid[0], 73.5, epsilon = 1e-12);
        assert_eq!(grid[99], 1.3 * 105.0);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_spot_grid_degenerate() {
        assert!(spot_grid(100.0, 0.7, 1.3, 0).is_empty());
        assert_eq!(spot_grid(100.0, 0.7, 1.3, 1), vec![70.0]);
        assert_eq!(spot_grid(100.0, 0.5, 1.5, 3), vec![50.0, 100.0, 150.0]);
    }

    #[test]
    fn test_breakeven() {
        assert_relative_eq!(breakeven(OptionType::Call, 105.0, 8.0214), 113.0214);
        assert_relative_eq!(breakeven(OptionType::Put, 105.0, 7.9004), 97.0996);
    }

    #[test]
    fn test_summary_reference_values() {
        let summary = DashboardSummary::new(&model());
        assert_relative_eq!(summary.call.price, 8.0214, epsilon = 1e-4);
        assert_relative_eq!(summary.put.price, 7.9004, epsilon = 1e-4);
        assert_eq!(summary.call.intrinsic, 0.0);
        assert_eq!(summary.put.intrinsic, 5.0);
        assert_relative_eq!(summary.put.extrinsic, summary.put.price - 5.0);
        assert_eq!(summary.valuation(OptionType::Put), &summary.put);
    }

    #[test]
    fn test_value_curve() {
        let model = model();
        let curve = ValueCurve::build(&model, OptionType::Call, &CurveConfig::default());

        assert_eq!(curve.points.len(), 100);
        assert_eq!(curve.spot, 100.0);
        assert_eq!(curve.strike, 105.0);
        assert_eq!(curve.premium, model.price(OptionType::Call));
        assert_relative_eq!(curve.breakeven, 105.0 + curve.premium);

        for point in &curve.points {
            let expected = model.with_spot(point.spot).unwrap().price(OptionType::Call);
            assert_eq!(point.value, expected);
            // value today dominates payoff for a non-dividend call
            assert!(point.value >= point.pnl_at_expiry + curve.premium - 1e-12);
        }

        let first = curve.points[0];
        assert_relative_eq!(first.pnl_at_expiry, -curve.premium);
    }

    #[test]
    fn test_put_curve_pnl() {
        let curve = ValueCurve::build(&model(), OptionType::Put, &CurveConfig::default());
        let first = curve.points[0];
        assert_relative_eq!(
            first.pnl_at_expiry,
            105.0 - first.spot - curve.premium,
            epsilon = 1e-12
        );
        let last = curve.points[curve.points.len() - 1];
        assert_relative_eq!(last.pnl_at_expiry, -curve.premium);
    }
}
