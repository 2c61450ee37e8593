//! Payment methods handled by `PaymentProcessor`.
//!
//! `GooglePayPayment` was added after the processor was written and needed no
//! change to it.

use crate::domain::amount::Amount;
use crate::domain::ports::PaymentMethod;

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardPayment;

impl PaymentMethod for CreditCardPayment {
    fn pay(&self, amount: Amount) -> String {
        format!("Paying {amount} using Credit Card")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalPayment;

impl PaymentMethod for PayPalPayment {
    fn pay(&self, amount: Amount) -> String {
        format!("Paying {amount} using PayPal")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BankTransferPayment;

impl PaymentMethod for BankTransferPayment {
    fn pay(&self, amount: Amount) -> String {
        format!("Paying {amount} using Bank Transfer")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GooglePayPayment;

impl PaymentMethod for GooglePayPayment {
    fn pay(&self, amount: Amount) -> String {
        format!("Paying {amount} using Google Pay")
    }
}
