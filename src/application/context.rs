use crate::domain::amount::Amount;
use crate::domain::ports::{
    PaymentReceiptBox, PaymentStrategyBox, PaymentSuiteFactory, PaymentValidatorBox,
};
use crate::error::{PaymentError, Result};
use serde::Serialize;
use std::io::Write;

/// Delegates payments to a strategy chosen by the caller.
///
/// The strategy is assigned once at construction. A context built with
/// `PaymentContext::default()` holds no strategy and refuses to pay.
#[derive(Default)]
pub struct PaymentContext {
    strategy: Option<PaymentStrategyBox>,
}

impl PaymentContext {
    pub fn new(strategy: PaymentStrategyBox) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    /// Returns the strategy's description of the payment.
    ///
    /// Fails with `PaymentError::MissingStrategy` when no strategy was supplied.
    pub fn pay_method(&self, amount: Amount) -> Result<String> {
        let strategy = self.strategy.as_ref().ok_or(PaymentError::MissingStrategy)?;
        Ok(strategy.pay(amount))
    }
}

/// The messages produced by one `FactoryPaymentContext::pay_method` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentOutcome {
    pub validation: String,
    pub payment: String,
    pub receipt: String,
}

impl PaymentOutcome {
    /// The messages in the order they are reported.
    pub fn lines(&self) -> [&str; 3] {
        [
            self.validation.as_str(),
            self.payment.as_str(),
            self.receipt.as_str(),
        ]
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Validates, pays and issues a receipt using one channel's objects.
///
/// All three collaborators come from the same `PaymentSuiteFactory` and are
/// created exactly once, when the context is built.
pub struct FactoryPaymentContext {
    strategy: PaymentStrategyBox,
    validator: PaymentValidatorBox,
    receipt: PaymentReceiptBox,
}

impl FactoryPaymentContext {
    pub fn from_factory(factory: &dyn PaymentSuiteFactory) -> Self {
        tracing::debug!("creating strategy, validator and receipt from factory");
        Self {
            strategy: factory.create_payment_strategy(),
            validator: factory.create_validator(),
            receipt: factory.create_receipt(),
        }
    }

    pub fn pay_method(&self, amount: Amount) -> PaymentOutcome {
        PaymentOutcome {
            validation: self.validator.validate(),
            payment: self.strategy.pay(amount),
            receipt: self.receipt.generate(amount),
        }
    }
}
