use crate::domain::amount::Amount;
use crate::domain::ports::PaymentMethod;
use crate::error::{PaymentError, Result};
use crate::infrastructure::methods::{BankTransferPayment, CreditCardPayment, PayPalPayment};
use std::io::Write;

/// Processes any `PaymentMethod`.
///
/// New payment methods are added by implementing the trait; this type never
/// needs to change for them.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentProcessor;

impl PaymentProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn process<W: Write>(
        &self,
        out: &mut W,
        method: &dyn PaymentMethod,
        amount: Amount,
    ) -> Result<()> {
        writeln!(out, "{}", method.pay(amount))?;
        Ok(())
    }
}

/// Dispatches on a payment method tag with a fixed chain of comparisons.
///
/// Supporting another method means editing `pay`; kept as the counterpart to
/// `PaymentProcessor`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagDispatchProcessor;

impl TagDispatchProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn pay<W: Write>(&self, out: &mut W, tag: &str, amount: Amount) -> Result<()> {
        tracing::debug!(tag, "dispatching on payment method tag");
        let line = if tag == "creditCard" {
            CreditCardPayment.pay(amount)
        } else if tag == "paypal" {
            PayPalPayment.pay(amount)
        } else if tag == "bankTransfer" {
            BankTransferPayment.pay(amount)
        } else {
            return Err(PaymentError::MethodNotFound(tag.to_string()));
        };
        writeln!(out, "{line}")?;
        Ok(())
    }
}
