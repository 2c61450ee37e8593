use crate::error::PaymentError;
use std::fmt;
use std::str::FromStr;

/// The payment channels served by the factory demos.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Channel {
    Upi,
    Bank,
    Card,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Upi, Channel::Bank, Channel::Card];

    /// Lowercase tag used in payment descriptions (`via upi`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Upi => "upi",
            Channel::Bank => "bank",
            Channel::Card => "card",
        }
    }

    /// Capitalised name used in validation and receipt messages.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Upi => "UPI",
            Channel::Bank => "Bank",
            Channel::Card => "Card",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upi" => Ok(Channel::Upi),
            "bank" => Ok(Channel::Bank),
            "card" => Ok(Channel::Card),
            other => Err(PaymentError::ValidationError(format!(
                "unknown payment channel '{other}'"
            ))),
        }
    }
}
