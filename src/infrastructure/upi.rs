use crate::domain::amount::Amount;
use crate::domain::channel::Channel;
use crate::domain::ports::{
    PaymentFactory, PaymentReceipt, PaymentReceiptBox, PaymentStrategy, PaymentStrategyBox,
    PaymentSuiteFactory, PaymentValidator, PaymentValidatorBox,
};

/// Pays through the Unified Payments Interface.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpiPaymentStrategy;

impl PaymentStrategy for UpiPaymentStrategy {
    fn pay(&self, amount: Amount) -> String {
        format!("pay {amount}₹ via {}", Channel::Upi)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UpiValidator;

impl PaymentValidator for UpiValidator {
    fn validate(&self) -> String {
        format!("{} validated successfully", Channel::Upi.label())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UpiReceipt;

impl PaymentReceipt for UpiReceipt {
    fn generate(&self, amount: Amount) -> String {
        format!("{} receipt generated for ₹{amount}", Channel::Upi.label())
    }
}

/// Creates the UPI strategy, validator and receipt generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpiFactory;

impl PaymentFactory for UpiFactory {
    fn create_payment_strategy(&self) -> PaymentStrategyBox {
        Box::new(UpiPaymentStrategy)
    }
}

impl PaymentSuiteFactory for UpiFactory {
    fn create_validator(&self) -> PaymentValidatorBox {
        Box::new(UpiValidator)
    }

    fn create_receipt(&self) -> PaymentReceiptBox {
        Box::new(UpiReceipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_upi_strategy_description() {
        let amount = Amount::new(dec!(250)).unwrap();
        assert_eq!(UpiPaymentStrategy.pay(amount), "pay 250₹ via upi");
    }

    #[test]
    fn test_upi_factory_creates_matching_suite() {
        let amount = Amount::new(dec!(40.5)).unwrap();
        let factory = UpiFactory;

        assert_eq!(
            factory.create_payment_strategy().pay(amount),
            "pay 40.5₹ via upi"
        );
        assert_eq!(
            factory.create_validator().validate(),
            "UPI validated successfully"
        );
        assert_eq!(
            factory.create_receipt().generate(amount),
            "UPI receipt generated for ₹40.5"
        );
    }
}
