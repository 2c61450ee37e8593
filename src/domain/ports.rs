use super::amount::Amount;

/// A payment behaviour selected at run time.
pub trait PaymentStrategy: Send + Sync {
    fn pay(&self, amount: Amount) -> String;
}

pub trait PaymentValidator: Send + Sync {
    fn validate(&self) -> String;
}

pub trait PaymentReceipt: Send + Sync {
    fn generate(&self, amount: Amount) -> String;
}

pub type PaymentStrategyBox = Box<dyn PaymentStrategy>;
pub type PaymentValidatorBox = Box<dyn PaymentValidator>;
pub type PaymentReceiptBox = Box<dyn PaymentReceipt>;

/// Creates the strategy of one payment channel. Every call allocates a new object.
pub trait PaymentFactory: Send + Sync {
    fn create_payment_strategy(&self) -> PaymentStrategyBox;
}

/// Creates the matching strategy, validator and receipt generator of one channel.
pub trait PaymentSuiteFactory: PaymentFactory {
    fn create_validator(&self) -> PaymentValidatorBox;
    fn create_receipt(&self) -> PaymentReceiptBox;
}

pub type PaymentSuiteFactoryBox = Box<dyn PaymentSuiteFactory>;

/// A boxed closure usable wherever a `PaymentFactory` is expected.
pub type StrategyFactoryFn = Box<dyn Fn() -> PaymentStrategyBox + Send + Sync>;

impl<F> PaymentFactory for F
where
    F: Fn() -> PaymentStrategyBox + Send + Sync,
{
    fn create_payment_strategy(&self) -> PaymentStrategyBox {
        self()
    }
}

/// A payment method accepted by the open/closed `PaymentProcessor`.
pub trait PaymentMethod: Send + Sync {
    fn pay(&self, amount: Amount) -> String;
}
