//! Command-line argument definitions

use std::path::PathBuf;

use bsm_core::types::OptionType;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::config::DefaultsConfig;
use crate::inputs::{DashboardInputs, Expiry};

/// Black-Scholes-Merton option analytics
#[derive(Parser, Debug)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "bsm.toml")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price the call and put with Greeks
    Price {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Value today and P/L at expiry across a spot grid
    Curve {
        /// Option type (call or put)
        #[arg(short = 't', long = "type", default_value = "call")]
        option_type: OptionType,

        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Run the pricer self-check
    Check,
}

/// Dashboard inputs; omitted values fall back to the configured defaults
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct InputArgs {
    /// Spot price
    #[arg(long)]
    pub spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    pub strike: Option<f64>,

    /// Calendar days to expiry
    #[arg(long, conflicts_with = "expiry_date")]
    pub days: Option<u32>,

    /// Expiry date (YYYY-MM-DD)
    #[arg(long)]
    pub expiry_date: Option<NaiveDate>,

    /// Valuation date for --expiry-date (YYYY-MM-DD, default today)
    #[arg(long, requires = "expiry_date")]
    pub valuation_date: Option<NaiveDate>,

    /// Risk-free rate in percent
    #[arg(long)]
    pub rate_pct: Option<f64>,

    /// Volatility in percent
    #[arg(long)]
    pub vol_pct: Option<f64>,

    /// Output format (table, json, csv)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InputArgs {
    /// Merge flags over `defaults`; `today` is the fallback valuation date.
    pub fn resolve(&self, defaults: &DefaultsConfig, today: NaiveDate) -> DashboardInputs {
        let mut inputs = DashboardInputs::from(defaults);
        if let Some(spot) = self.spot {
            inputs.spot = spot;
        }
        if let Some(strike) = self.strike {
            inputs.strike = strike;
        }
        if let Some(days) = self.days {
            inputs.expiry = Expiry::Days(days);
        }
        if let Some(expiry) = self.expiry_date {
            inputs.expiry = Expiry::Date {
                expiry,
                valuation: self.valuation_date.unwrap_or(today),
            };
        }
        if let Some(rate_pct) = self.rate_pct {
            inputs.rate_pct = rate_pct;
        }
        if let Some(vol_pct) = self.vol_pct {
            inputs.vol_pct = vol_pct;
        }
        inputs
    }
}

impl Commands {
    /// Input flags of the selected command, if it takes any
    pub fn input_args(&self) -> Option<&InputArgs> {
        match self {
            Commands::Price { inputs } | Commands::Curve { inputs, .. } => Some(inputs),
            Commands::Check => None,
        }
    }
}
