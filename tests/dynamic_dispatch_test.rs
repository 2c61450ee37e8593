use payment_patterns::application::context::PaymentContext;
use payment_patterns::domain::ports::{
    PaymentStrategyBox, PaymentSuiteFactory, PaymentSuiteFactoryBox,
};
use payment_patterns::infrastructure::bank::{BankFactory, BankPaymentStrategy};
use payment_patterns::infrastructure::card::{CardFactory, CardPaymentStrategy};
use payment_patterns::infrastructure::upi::{UpiFactory, UpiPaymentStrategy};

mod common;

fn assert_send_sync<T: Send + Sync + ?Sized>() {}

#[test]
fn test_ports_are_send_and_sync() {
    assert_send_sync::<PaymentStrategyBox>();
    assert_send_sync::<PaymentSuiteFactoryBox>();
    assert_send_sync::<dyn PaymentSuiteFactory>();
}

#[test]
fn test_strategies_as_trait_objects() {
    let strategies: Vec<(PaymentStrategyBox, &str)> = vec![
        (Box::new(UpiPaymentStrategy) as PaymentStrategyBox, "pay 10₹ via upi"),
        (Box::new(BankPaymentStrategy) as PaymentStrategyBox, "pay 10₹ via bank"),
        (Box::new(CardPaymentStrategy) as PaymentStrategyBox, "pay 10₹ via card"),
    ];

    for (strategy, expected) in strategies {
        let context = PaymentContext::new(strategy);
        assert_eq!(context.pay_method(common::amount(10)).unwrap(), expected);
    }
}

#[test]
fn test_each_factory_returns_its_own_strategy() {
    let factories: Vec<(PaymentSuiteFactoryBox, &str)> = vec![
        (Box::new(UpiFactory) as PaymentSuiteFactoryBox, "upi"),
        (Box::new(BankFactory) as PaymentSuiteFactoryBox, "bank"),
        (Box::new(CardFactory) as PaymentSuiteFactoryBox, "card"),
    ];

    for (factory, channel) in factories {
        let description = factory
            .create_payment_strategy()
            .pay(common::amount(999));
        assert_eq!(description, format!("pay 999₹ via {channel}"));
    }
}
