//! # bsm_cli: option analytics dashboard
//!
//! Command-line front end over the Black-Scholes-Merton pricer. Takes
//! dashboard inputs in user units (percent, calendar days), prices the call
//! and put, and renders Greeks, value curves and breakevens.
//!
//! # Commands
//!
//! - `bsm price` - call and put prices with Greeks
//! - `bsm curve --type call|put` - value today and P/L at expiry across spots
//! - `bsm check` - self-test against the reference scenario
//!
//! # Architecture
//!
//! As the service layer, this crate owns configuration, logging and
//! presentation. Numerics live in `bsm_core` and `bsm_models`, which never
//! log or read configuration.

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod inputs;
pub mod report;

pub use error::{CliError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
