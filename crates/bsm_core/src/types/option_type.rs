//! Option type tag.
//!
//! A closed two-variant enum replaces stringly-typed dispatch. Text is parsed
//! once at the boundary with [`FromStr`]; everything past that point matches
//! exhaustively.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::PricingError;

/// European option type.
///
/// # Examples
/// ```
/// use bsm_core::types::OptionType;
///
/// let put: OptionType = "PUT".parse().unwrap();
/// assert_eq!(put, OptionType::Put);
/// assert_eq!(put.intrinsic(90.0_f64, 100.0), 10.0);
///
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike: payoff max(S − K, 0).
    Call,
    /// Right to sell at the strike: payoff max(K − S, 0).
    Put,
}

impl OptionType {
    /// Both variants, call first.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Returns true for [`OptionType::Call`].
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns true for [`OptionType::Put`].
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Lower-case name, as accepted by the parser.
    pub fn name(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }

    /// Intrinsic value: max(0, S − K) for a call, max(0, K − S) for a put.
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let exercise = match self {
            OptionType::Call => spot - strike,
            OptionType::Put => strike - spot,
        };
        exercise.max(T::zero())
    }

    /// Spot level at expiry where the payoff recovers the premium paid.
    ///
    /// K + premium for a call, K − premium for a put.
    #[inline]
    pub fn breakeven<T: Float>(&self, strike: T, premium: T) -> T {
        match self {
            OptionType::Call => strike + premium,
            OptionType::Put => strike - premium,
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parses `call`/`c` or `put`/`p`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepted_spellings() {
        for text in ["call", "Call", "CALL", " c ", "C"] {
            assert_eq!(text.parse::<OptionType>().unwrap(), OptionType::Call);
        }
        for text in ["put", "Put", "PUT", "p"] {
            assert_eq!(text.parse::<OptionType>().unwrap(), OptionType::Put);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_types() {
        for text in ["straddle", "", "calls", "digital"] {
            match text.parse::<OptionType>() {
                Err(PricingError::InvalidOptionType(raw)) => assert_eq!(raw, text),
                other => panic!("expected InvalidOptionType for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        for kind in OptionType::ALL {
            assert_eq!(kind.to_string().parse::<OptionType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_intrinsic() {
        assert_eq!(OptionType::Call.intrinsic(110.0_f64, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0_f64, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(90.0_f64, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(110.0_f64, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(100.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_breakeven() {
        assert_eq!(OptionType::Call.breakeven(105.0_f64, 8.0), 113.0);
        assert_eq!(OptionType::Put.breakeven(105.0_f64, 8.0), 97.0);
    }

    #[test]
    fn test_predicates() {
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Call.is_put());
        assert!(OptionType::Put.is_put());
    }
}
