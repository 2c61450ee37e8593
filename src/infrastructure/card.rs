use crate::domain::amount::Amount;
use crate::domain::channel::Channel;
use crate::domain::ports::{
    PaymentFactory, PaymentReceipt, PaymentReceiptBox, PaymentStrategy, PaymentStrategyBox,
    PaymentSuiteFactory, PaymentValidator, PaymentValidatorBox,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct CardPaymentStrategy;

impl PaymentStrategy for CardPaymentStrategy {
    fn pay(&self, amount: Amount) -> String {
        format!("pay {amount}₹ via {}", Channel::Card)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CardValidator;

impl PaymentValidator for CardValidator {
    fn validate(&self) -> String {
        format!("{} validated successfully", Channel::Card.label())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CardReceipt;

impl PaymentReceipt for CardReceipt {
    fn generate(&self, amount: Amount) -> String {
        format!("{} receipt generated for ₹{amount}", Channel::Card.label())
    }
}

/// Creates the card strategy, validator and receipt generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardFactory;

impl PaymentFactory for CardFactory {
    fn create_payment_strategy(&self) -> PaymentStrategyBox {
        Box::new(CardPaymentStrategy)
    }
}

impl PaymentSuiteFactory for CardFactory {
    fn create_validator(&self) -> PaymentValidatorBox {
        Box::new(CardValidator)
    }

    fn create_receipt(&self) -> PaymentReceiptBox {
        Box::new(CardReceipt)
    }
}
