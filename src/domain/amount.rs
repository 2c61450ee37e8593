use crate::error::PaymentError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A non-negative payment amount.
///
/// Zero is a valid amount; only negative values are refused.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(PaymentError::ValidationError(format!(
                "amount {value} is negative"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| PaymentError::ValidationError(format!("invalid amount '{s}': {e}")))?;
        Self::new(value)
    }
}

// Trailing zeros are dropped so that `100.0` reads as `100` in descriptions.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_is_accepted_and_negative_refused() {
        assert_eq!(Amount::new(dec!(0)).unwrap().to_string(), "0");
        assert_eq!(Amount::new(dec!(-0.00)).unwrap().to_string(), "0");

        let err = Amount::new(dec!(-1.5)).unwrap_err();
        assert!(matches!(err, PaymentError::ValidationError(_)));
        assert_eq!(err.to_string(), "Validation error: amount -1.5 is negative");
    }

    #[test]
    fn test_display_drops_trailing_zeros() {
        assert_eq!(Amount::new(dec!(100.0)).unwrap().to_string(), "100");
        assert_eq!(Amount::new(dec!(12.50)).unwrap().to_string(), "12.5");
        assert_eq!(Amount::new(dec!(0.0001)).unwrap().to_string(), "0.0001");
    }

    #[test]
    fn test_parse_from_text() {
        let amount: Amount = " 250 ".parse().unwrap();
        assert_eq!(amount.value(), dec!(250));

        assert!(matches!(
            "abc".parse::<Amount>(),
            Err(PaymentError::ValidationError(_))
        ));
        assert!(matches!(
            "-5".parse::<Amount>(),
            Err(PaymentError::ValidationError(_))
        ));
    }
}
