//! Concrete payment channels and payment methods.
//!
//! Each channel module pairs its strategy, validator and receipt generator with
//! exactly one factory, so a factory can never hand out objects of another channel.

pub mod bank;
pub mod card;
pub mod methods;
pub mod upi;

use crate::domain::channel::Channel;
use crate::domain::ports::PaymentSuiteFactoryBox;

/// Returns the factory serving the given channel.
pub fn factory_for(channel: Channel) -> PaymentSuiteFactoryBox {
    tracing::debug!(%channel, "selecting payment factory");
    match channel {
        Channel::Upi => Box::new(upi::UpiFactory),
        Channel::Bank => Box::new(bank::BankFactory),
        Channel::Card => Box::new(card::CardFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::Amount;
    use rust_decimal_macros::dec;

    #[test]
    fn test_factory_for_every_channel_matches_its_channel() {
        let amount = Amount::new(dec!(75)).unwrap();

        for channel in Channel::ALL {
            let factory = factory_for(channel);
            assert_eq!(
                factory.create_payment_strategy().pay(amount),
                format!("pay 75₹ via {channel}")
            );
            assert_eq!(
                factory.create_validator().validate(),
                format!("{} validated successfully", channel.label())
            );
            assert_eq!(
                factory.create_receipt().generate(amount),
                format!("{} receipt generated for ₹75", channel.label())
            );
        }
    }
}
