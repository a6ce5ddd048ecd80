//! CLI error types

use bsm_core::types::PricingError;
use bsm_models::analytical::AnalyticalError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Pricing error
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Output serialisation error
    #[error("Serialisation error: {0}")]
    Serialisation(String),

    /// Self-check failure
    #[error("Self-check failed: {0}")]
    CheckFailed(String),
}

impl From<AnalyticalError> for CliError {
    fn from(err: AnalyticalError) -> Self {
        CliError::Pricing(err.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialisation(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Serialisation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_wraps_option_type() {
        let err: CliError = PricingError::InvalidOptionType("straddle".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Pricing error: Invalid option type: 'straddle'. Must be 'call' or 'put'"
        );
    }

    #[test]
    fn test_analytical_error_becomes_pricing_error() {
        let err: CliError = AnalyticalError::InvalidSpot { spot: -1.0 }.into();
        assert!(matches!(err, CliError::Pricing(PricingError::InvalidInput(_))));
    }
}
