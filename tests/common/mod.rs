use payment_patterns::domain::amount::Amount;
use rust_decimal::Decimal;

pub fn amount(value: u32) -> Amount {
    Amount::new(Decimal::from(value)).expect("test amounts are non-negative")
}
