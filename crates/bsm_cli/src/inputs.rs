//! Dashboard inputs in user units.
//!
//! Users enter percentages and calendar days; the pricing core works in
//! decimals and years. [`DashboardInputs::to_canonical`] validates the
//! user-facing limits and performs that conversion.

use bsm_core::types::time::days_until;
use bsm_core::types::years_from_days;
use bsm_models::analytical::BlackScholes;
use chrono::NaiveDate;

use crate::config::DefaultsConfig;
use crate::error::{CliError, Result};

/// Longest supported tenor in calendar days (three years).
pub const MAX_DAYS: i64 = 1095;
/// Smallest spot or strike accepted.
pub const MIN_PRICE: f64 = 1.0;
/// Rate bounds in percent.
pub const RATE_PCT_RANGE: (f64, f64) = (0.0, 20.0);
/// Volatility bounds in percent.
pub const VOL_PCT_RANGE: (f64, f64) = (1.0, 100.0);

/// How time to expiry was specified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expiry {
    /// Calendar days from today.
    Days(u32),
    /// Explicit expiry date measured from a valuation date.
    Date {
        expiry: NaiveDate,
        valuation: NaiveDate,
    },
}

impl Expiry {
    /// Calendar days to expiry, signed.
    pub fn days(&self) -> i64 {
        match *self {
            Expiry::Days(days) => i64::from(days),
            Expiry::Date { expiry, valuation } => days_until(valuation, expiry),
        }
    }
}

/// One set of dashboard parameters as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardInputs {
    pub spot: f64,
    pub strike: f64,
    pub expiry: Expiry,
    pub rate_pct: f64,
    pub vol_pct: f64,
}

impl From<&DefaultsConfig> for DashboardInputs {
    fn from(defaults: &DefaultsConfig) -> Self {
        Self {
            spot: defaults.spot,
            strike: defaults.strike,
            expiry: Expiry::Days(defaults.days),
            rate_pct: defaults.rate_pct,
            vol_pct: defaults.vol_pct,
        }
    }
}

impl DashboardInputs {
    /// Check every field against the dashboard limits.
    pub fn validate(&self) -> Result<()> {
        if !(self.spot >= MIN_PRICE && self.spot.is_finite()) {
            return Err(CliError::InvalidArgument(format!(
                "spot must be at least {MIN_PRICE}, got {}",
                self.spot
            )));
        }
        if !(self.strike >= MIN_PRICE && self.strike.is_finite()) {
            return Err(CliError::InvalidArgument(format!(
                "strike must be at least {MIN_PRICE}, got {}",
                self.strike
            )));
        }

        let days = self.expiry.days();
        let min_days = match self.expiry {
            Expiry::Days(_) => 1,
            Expiry::Date { .. } => 0,
        };
        if !(min_days..=MAX_DAYS).contains(&days) {
            return Err(CliError::InvalidArgument(format!(
                "days to expiry must be in [{min_days}, {MAX_DAYS}], got {days}"
            )));
        }

        let (lo, hi) = RATE_PCT_RANGE;
        if !(lo..=hi).contains(&self.rate_pct) {
            return Err(CliError::InvalidArgument(format!(
                "rate must be in [{lo}, {hi}] %, got {}",
                self.rate_pct
            )));
        }
        let (lo, hi) = VOL_PCT_RANGE;
        if !(lo..=hi).contains(&self.vol_pct) {
            return Err(CliError::InvalidArgument(format!(
                "volatility must be in [{lo}, {hi}] %, got {}",
                self.vol_pct
            )));
        }
        Ok(())
    }

    /// Time to expiry in years (ACT/365).
    pub fn expiry_years(&self) -> f64 {
        years_from_days(self.expiry.days() as f64)
    }

    /// Validated model parameters in canonical units.
    pub fn to_canonical(&self) -> Result<BlackScholes<f64>> {
        self.validate()?;
        let model = BlackScholes::new(
            self.spot,
            self.strike,
            self.expiry_years(),
            self.rate_pct / 100.0,
            self.vol_pct / 100.0,
        )?;
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs() -> DashboardInputs {
        DashboardInputs::from(&DefaultsConfig::default())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_convert_to_reference_scenario() {
        let model = inputs().to_canonical().unwrap();
        assert_eq!(model.spot(), 100.0);
        assert_eq!(model.strike(), 105.0);
        assert_relative_eq!(model.expiry(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(model.rate(), 0.05, epsilon = 1e-15);
        assert_relative_eq!(model.volatility(), 0.2, epsilon = 1e-15);
    }

    #[test]
    fn test_expiry_date_counts_calendar_days() {
        let mut inputs = inputs();
        inputs.expiry = Expiry::Date {
            expiry: date(2025, 3, 1),
            valuation: date(2025, 1, 30),
        };
        assert_eq!(inputs.expiry.days(), 30);
        assert_relative_eq!(inputs.expiry_years(), 30.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_expiry_date_on_valuation_date_is_allowed() {
        let mut inputs = inputs();
        let today = date(2025, 6, 1);
        inputs.expiry = Expiry::Date {
            expiry: today,
            valuation: today,
        };
        let model = inputs.to_canonical().unwrap();
        assert!(model.is_expired());
    }

    #[test]
    fn test_zero_days_rejected() {
        let mut inputs = inputs();
        inputs.expiry = Expiry::Days(0);
        assert!(matches!(
            inputs.to_canonical(),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_past_expiry_date_rejected() {
        let mut inputs = inputs();
        inputs.expiry = Expiry::Date {
            expiry: date(2025, 1, 1),
            valuation: date(2025, 1, 2),
        };
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_limits() {
        let cases: [fn(&mut DashboardInputs); 7] = [
            |i| i.spot = 0.5,
            |i| i.strike = f64::NAN,
            |i| i.expiry = Expiry::Days(1096),
            |i| i.rate_pct = -0.1,
            |i| i.rate_pct = 20.5,
            |i| i.vol_pct = 0.5,
            |i| i.vol_pct = 101.0,
        ];
        for mutate in cases {
            let mut inputs = inputs();
            mutate(&mut inputs);
            assert!(matches!(
                inputs.validate(),
                Err(CliError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_boundaries_accepted() {
        let inputs = DashboardInputs {
            spot: 1.0,
            strike: 1.0,
            expiry: Expiry::Days(1095),
            rate_pct: 0.0,
            vol_pct: 100.0,
        };
        assert!(inputs.to_canonical().is_ok());
    }
}
