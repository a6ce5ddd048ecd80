//! Curve command implementation
//!
//! Builds the value-today and P/L-at-expiry curves for one side.

use std::path::Path;

use bsm_core::types::OptionType;
use tracing::info;

use super::emit;
use crate::analysis::ValueCurve;
use crate::config::CurveConfig;
use crate::inputs::DashboardInputs;
use crate::report::{render_curve, OutputFormat};
use crate::Result;

/// Render the value curve for `option_type`
pub fn execute(
    inputs: &DashboardInputs,
    option_type: OptionType,
    curve: &CurveConfig,
    format: OutputFormat,
) -> Result<String> {
    let model = inputs.to_canonical()?;
    let curve = ValueCurve::build(&model, option_type, curve);

    info!(
        option_type = %option_type,
        premium = curve.premium,
        breakeven = curve.breakeven,
        "Built curve"
    );

    render_curve(&curve, format)
}

/// Run the curve command
pub fn run(
    inputs: &DashboardInputs,
    option_type: OptionType,
    curve: &CurveConfig,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    info!("Starting curve...");
    info!("  Option type: {}", option_type);
    info!(
        "  Grid: {}K to {}K, {} points",
        curve.lower, curve.upper, curve.points
    );

    let rendered = execute(inputs, option_type, curve, format)?;
    emit(&rendered, output)?;

    info!("Curve complete");
    Ok(())
}
