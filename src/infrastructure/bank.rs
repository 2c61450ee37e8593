use crate::domain::amount::Amount;
use crate::domain::channel::Channel;
use crate::domain::ports::{
    PaymentFactory, PaymentReceipt, PaymentReceiptBox, PaymentStrategy, PaymentStrategyBox,
    PaymentSuiteFactory, PaymentValidator, PaymentValidatorBox,
};

/// Pays by direct bank transfer.
#[derive(Debug, Default, Clone, Copy)]
pub struct BankPaymentStrategy;

impl PaymentStrategy for BankPaymentStrategy {
    fn pay(&self, amount: Amount) -> String {
        format!("pay {amount}₹ via {}", Channel::Bank)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BankValidator;

impl PaymentValidator for BankValidator {
    fn validate(&self) -> String {
        format!("{} validated successfully", Channel::Bank.label())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BankReceipt;

impl PaymentReceipt for BankReceipt {
    fn generate(&self, amount: Amount) -> String {
        format!("{} receipt generated for ₹{amount}", Channel::Bank.label())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BankFactory;

impl PaymentFactory for BankFactory {
    fn create_payment_strategy(&self) -> PaymentStrategyBox {
        Box::new(BankPaymentStrategy)
    }
}

impl PaymentSuiteFactory for BankFactory {
    fn create_validator(&self) -> PaymentValidatorBox {
        Box::new(BankValidator)
    }

    fn create_receipt(&self) -> PaymentReceiptBox {
        Box::new(BankReceipt)
    }
}
