//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced at the pricing API boundary

use thiserror::Error;

/// Categorised pricing errors.
///
/// Boundary conditions such as expiry or zero volatility are never errors;
/// they have defined closed-form limits. The only failures are inputs the
/// typed API cannot represent.
///
/// # Variants
/// - `InvalidOptionType`: Text that does not name a call or a put
/// - `InvalidInput`: Market or contract parameters outside their domain
///
/// # Examples
/// ```
/// use bsm_core::types::PricingError;
///
/// let err = PricingError::InvalidOptionType("straddle".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Invalid option type: 'straddle'. Must be 'call' or 'put'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Option type text other than call or put.
    #[error("Invalid option type: '{0}'. Must be 'call' or 'put'")]
    InvalidOptionType(String),

    /// Invalid market data or contract parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
