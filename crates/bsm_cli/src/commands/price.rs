//! Price command implementation
//!
//! Prices the call and put for one set of dashboard inputs.

use std::path::Path;

use tracing::info;

use super::emit;
use crate::analysis::DashboardSummary;
use crate::inputs::DashboardInputs;
use crate::report::{render_summary, OutputFormat};
use crate::Result;

/// Render call and put valuations for `inputs`
pub fn execute(inputs: &DashboardInputs, format: OutputFormat) -> Result<String> {
    let model = inputs.to_canonical()?;
    let summary = DashboardSummary::new(&model);

    info!(
        call = summary.call.price,
        put = summary.put.price,
        "Priced options"
    );

    render_summary(&summary, format)
}

/// Run the price command
pub fn run(inputs: &DashboardInputs, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    info!("Starting pricing...");
    info!("  Inputs: {:?}", inputs);
    info!("  Output format: {}", format);

    let rendered = execute(inputs, format)?;
    emit(&rendered, output)?;

    info!("Pricing complete");
    Ok(())
}
