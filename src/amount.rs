//! User-entered token amounts and base-unit conversion.
//!
//! Amounts arrive from the UI as decimal strings ("12.50"). Parsing
//! enforces a strictly positive value; conversion to the smallest on-chain
//! unit is exact and rejects excess precision rather than rounding.

use std::fmt::Display;
use std::str::FromStr;

use alloy::primitives::U256;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Decimal count shared by the supported stablecoins (USDC, EURC).
///
/// Amount math assumes this holds uniformly on every chain.
pub const STABLECOIN_DECIMALS: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount is not a number: {input:?}")]
    Unparseable { input: String },
    #[error("Amount must be greater than zero, got {input}")]
    NotPositive { input: Decimal },
    #[error("Amount {input} has more than {decimals} decimal places")]
    ExcessPrecision { input: Decimal, decimals: u32 },
    #[error("Amount does not fit in the token's base-unit range")]
    Overflow,
}

/// A positive token amount in display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenAmount(Decimal);

impl FromStr for TokenAmount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed = Decimal::from_str(value.trim()).map_err(|_| AmountError::Unparseable {
            input: value.to_string(),
        })?;

        if parsed <= Decimal::ZERO {
            return Err(AmountError::NotPositive { input: parsed });
        }

        Ok(Self(parsed))
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TokenAmount {
    /// Converts to the token's smallest unit without loss.
    pub fn to_base_units(self, decimals: u32) -> Result<U256, AmountError> {
        let scale = Decimal::from(10u128.pow(decimals));
        let scaled = self.0.checked_mul(scale).ok_or(AmountError::Overflow)?;

        if !scaled.fract().is_zero() {
            return Err(AmountError::ExcessPrecision {
                input: self.0,
                decimals,
            });
        }

        let units = scaled.trunc().to_u128().ok_or(AmountError::Overflow)?;
        Ok(U256::from(units))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_strings() {
        let amount: TokenAmount = "12.50".parse().unwrap();
        assert_eq!(
            amount.to_base_units(STABLECOIN_DECIMALS).unwrap(),
            U256::from(12_500_000u64)
        );

        let whole: TokenAmount = "1".parse().unwrap();
        assert_eq!(
            whole.to_base_units(STABLECOIN_DECIMALS).unwrap(),
            U256::from(1_000_000u64)
        );
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(
            "0".parse::<TokenAmount>(),
            Err(AmountError::NotPositive {
                input: Decimal::ZERO
            })
        );
        assert!(matches!(
            "-5".parse::<TokenAmount>(),
            Err(AmountError::NotPositive { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(matches!(
            "abc".parse::<TokenAmount>(),
            Err(AmountError::Unparseable { .. })
        ));
        assert!(matches!(
            "".parse::<TokenAmount>(),
            Err(AmountError::Unparseable { .. })
        ));
        assert!(matches!(
            "1.2.3".parse::<TokenAmount>(),
            Err(AmountError::Unparseable { .. })
        ));
    }

    #[test]
    fn rejects_excess_precision() {
        let amount: TokenAmount = "0.1234567".parse().unwrap();
        assert!(matches!(
            amount.to_base_units(STABLECOIN_DECIMALS),
            Err(AmountError::ExcessPrecision { .. })
        ));
    }

    #[test]
    fn six_decimals_is_the_boundary() {
        let amount: TokenAmount = "0.123456".parse().unwrap();
        assert_eq!(
            amount.to_base_units(STABLECOIN_DECIMALS).unwrap(),
            U256::from(123_456u64)
        );
    }
}
