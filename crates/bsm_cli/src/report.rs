//! Report rendering for dashboard summaries and value curves.
//!
//! Tables mirror the dashboard metrics: four decimal places and vega quoted
//! per 1% volatility move. JSON and CSV carry full precision with vega per
//! unit volatility, as returned by the model.

use std::fmt::Write as _;
use std::str::FromStr;

use bsm_core::types::OptionType;
use serde::Serialize;

use crate::analysis::{DashboardSummary, ValueCurve};
use crate::error::{CliError, Result};

/// Output formats supported by every command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Flat CSV row for one side of a summary.
#[derive(Serialize)]
struct SummaryRow {
    option_type: OptionType,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    price: f64,
    intrinsic: f64,
    extrinsic: f64,
    delta: f64,
    gamma: f64,
    vega: f64,
    theta: f64,
    rho: f64,
}

/// Render call and put valuations.
pub fn render_summary(summary: &DashboardSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Csv => {
            let rows = OptionType::ALL.map(|kind| {
                let v = summary.valuation(kind);
                SummaryRow {
                    option_type: kind,
                    spot: summary.spot,
                    strike: summary.strike,
                    expiry: summary.expiry,
                    rate: summary.rate,
                    volatility: summary.volatility,
                    price: v.price,
                    intrinsic: v.intrinsic,
                    extrinsic: v.extrinsic,
                    delta: v.greeks.delta,
                    gamma: v.greeks.gamma,
                    vega: v.greeks.vega,
                    theta: v.greeks.theta,
                    rho: v.greeks.rho,
                }
            });
            to_csv(&rows)
        }
        OutputFormat::Table => Ok(summary_table(summary)),
    }
}

fn summary_table(summary: &DashboardSummary) -> String {
    let (call, put) = (&summary.call, &summary.put);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "S = {:.4}  K = {:.4}  T = {:.4}y  r = {:.2}%  σ = {:.2}%",
        summary.spot,
        summary.strike,
        summary.expiry,
        summary.rate * 100.0,
        summary.volatility * 100.0
    );
    out.push_str("┌────────────┬──────────────┬──────────────┐\n");
    out.push_str("│ Metric     │         Call │          Put │\n");
    out.push_str("├────────────┼──────────────┼──────────────┤\n");

    let rows = [
        ("Price", call.price, put.price),
        ("Intrinsic", call.intrinsic, put.intrinsic),
        ("Extrinsic", call.extrinsic, put.extrinsic),
        ("Delta", call.greeks.delta, put.greeks.delta),
        ("Gamma", call.greeks.gamma, put.greeks.gamma),
        (
            "Vega (1%)",
            call.greeks.vega_per_vol_point(),
            put.greeks.vega_per_vol_point(),
        ),
        ("Theta/day", call.greeks.theta, put.greeks.theta),
        ("Rho (1%)", call.greeks.rho, put.greeks.rho),
    ];
    for (label, c, p) in rows {
        let _ = writeln!(out, "│ {:<10} │ {:>12.4} │ {:>12.4} │", label, c, p);
    }
    out.push_str("└────────────┴──────────────┴──────────────┘\n");
    out
}

/// Render a value curve with its premium and breakeven.
pub fn render_curve(curve: &ValueCurve, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(curve)?),
        OutputFormat::Csv => to_csv(&curve.points),
        OutputFormat::Table => Ok(curve_table(curve)),
    }
}

fn curve_table(curve: &ValueCurve) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} S = {:.4}  K = {:.4}  premium = {:.4}  breakeven = {:.4}",
        curve.option_type, curve.spot, curve.strike, curve.premium, curve.breakeven
    );
    out.push_str("┌──────────────┬──────────────┬──────────────┐\n");
    out.push_str("│         Spot │  Value today │ P/L expiry   │\n");
    out.push_str("├──────────────┼──────────────┼──────────────┤\n");
    for point in &curve.points {
        let _ = writeln!(
            out,
            "│ {:>12.4} │ {:>12.4} │ {:>12.4} │",
            point.spot, point.value, point.pnl_at_expiry
        );
    }
    out.push_str("└──────────────┴──────────────┴──────────────┘\n");
    out
}

fn to_csv<R: Serialize>(rows: &[R]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Serialisation(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Serialisation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CurveConfig;
    use bsm_models::analytical::BlackScholes;

    fn model() -> BlackScholes<f64> {
        BlackScholes::new(100.0, 105.0, 1.0, 0.05, 0.2).unwrap()
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str(" csv ").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_summary_table_uses_four_decimals_and_vega_per_point() {
        let table = render_summary(&DashboardSummary::new(&model()), OutputFormat::Table).unwrap();
        assert!(table.contains("8.0214"));
        assert!(table.contains("7.9005") || table.contains("7.9004"));
        assert!(table.contains("0.3967"));
        assert!(table.contains("Theta/day"));
    }

    #[test]
    fn test_summary_json() {
        let json = render_summary(&DashboardSummary::new(&model()), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["call"]["option_type"], "call");
        assert_eq!(value["put"]["intrinsic"], 5.0);
        assert!(value["call"]["greeks"]["vega"].as_f64().unwrap() > 39.0);
    }

    #[test]
    fn test_summary_csv() {
        let csv = render_summary(&DashboardSummary::new(&model()), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("option_type,spot,strike"));
        assert!(lines[1].starts_with("call,"));
        assert!(lines[2].starts_with("put,"));
    }

    #[test]
    fn test_curve_csv_and_table() {
        let curve = ValueCurve::build(&model(), OptionType::Put, &CurveConfig::default());

        let csv = render_curve(&curve, OutputFormat::Csv).unwrap();
        assert_eq!(csv.lines().count(), 101);
        assert_eq!(csv.lines().next(), Some("spot,value,pnl_at_expiry"));

        let table = render_curve(&curve, OutputFormat::Table).unwrap();
        assert!(table.starts_with("put S = 100.0000  K = 105.0000"));
        assert!(table.contains("breakeven"));
    }

    #[test]
    fn test_curve_json_carries_reference_levels() {
        let curve = ValueCurve::build(&model(), OptionType::Call, &CurveConfig::default());
        let json = render_curve(&curve, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["spot"], 100.0);
        assert_eq!(value["strike"], 105.0);
        assert_eq!(value["breakeven"].as_f64(), Some(curve.breakeven));
        assert_eq!(value["points"].as_array().map(Vec::len), Some(100));
    }
}
