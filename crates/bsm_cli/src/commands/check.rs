//! Check command implementation
//!
//! Self-test: evaluates the reference scenario and the closed-form
//! identities the pricer must satisfy.

use bsm_core::types::{OptionType, PricingError};
use bsm_models::analytical::black_scholes::price_named;
use bsm_models::analytical::BlackScholes;
use tracing::{info, warn};

use crate::{CliError, Result};

/// One named self-test outcome
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    fn new(name: &'static str, passed: bool, detail: String) -> Self {
        Self {
            name,
            passed,
            detail,
        }
    }
}

/// Evaluate every self-test
pub fn checks() -> Result<Vec<CheckResult>> {
    let (s, k, t, r, v): (f64, f64, f64, f64, f64) = (100.0, 105.0, 1.0, 0.05, 0.2);
    let model = BlackScholes::new(s, k, t, r, v)?;
    let call = model.price(OptionType::Call);
    let put = model.price(OptionType::Put);

    let mut results = Vec::new();

    results.push(CheckResult::new(
        "reference call price",
        (call - 8.0214).abs() < 1e-4,
        format!("{:.6} (expected 8.0214)", call),
    ));
    results.push(CheckResult::new(
        "reference put price",
        (put - 7.9004).abs() < 1e-4,
        format!("{:.6} (expected 7.9004)", put),
    ));

    let delta = model.delta(OptionType::Call);
    results.push(CheckResult::new(
        "reference call delta",
        (delta - 0.5422).abs() < 1e-4,
        format!("{:.6} (expected 0.5422)", delta),
    ));

    let gap = call - put - (s - k * (-r * t).exp());
    results.push(CheckResult::new(
        "put-call parity",
        gap.abs() < 1e-10,
        format!("gap {:.3e}", gap),
    ));

    let expired = BlackScholes::new(110.0, k, 0.0, r, v)?;
    let (call_payoff, put_payoff) = (
        expired.price(OptionType::Call),
        expired.price(OptionType::Put),
    );
    results.push(CheckResult::new(
        "expiry collapses to intrinsic",
        call_payoff == 5.0 && put_payoff == 0.0,
        format!("call {:.4}, put {:.4}", call_payoff, put_payoff),
    ));

    let rejected = matches!(
        price_named(s, k, t, r, v, "straddle"),
        Err(PricingError::InvalidOptionType(_))
    );
    results.push(CheckResult::new(
        "unknown option type rejected",
        rejected,
        "'straddle'".to_string(),
    ));

    Ok(results)
}

/// Render the check report
pub fn render(results: &[CheckResult]) -> String {
    let mut out = String::from("BSM pricer self-check\n");
    for result in results {
        let mark = if result.passed { "✓" } else { "✗" };
        out.push_str(&format!("  {} {:<30} {}\n", mark, result.name, result.detail));
    }
    let passed = results.iter().filter(|r| r.passed).count();
    out.push_str(&format!("{}/{} checks passed\n", passed, results.len()));
    out
}

/// Run the check command
pub fn run() -> Result<()> {
    info!("Running self-check...");
    let results = checks()?;
    print!("{}", render(&results));

    let failed: Vec<&str> = results
        .iter()
        .filter(|r| !r.passed)
        .map(|r| r.name)
        .collect();
    if !failed.is_empty() {
        warn!(failed = failed.len(), "Self-check failed");
        return Err(CliError::CheckFailed(failed.join(", ")));
    }

    info!("Self-check complete");
    Ok(())
}
