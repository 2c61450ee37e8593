use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payment_patterns::application::context::{FactoryPaymentContext, PaymentContext};
use payment_patterns::application::processor::{PaymentProcessor, TagDispatchProcessor};
use payment_patterns::application::singleton::Singleton;
use payment_patterns::domain::amount::Amount;
use payment_patterns::domain::channel::Channel;
use payment_patterns::infrastructure::factory_for;
use payment_patterns::infrastructure::methods::{
    CreditCardPayment, GooglePayPayment, PayPalPayment,
};
use payment_patterns::logger::init_cli_logger;
use rust_decimal::Decimal;
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pay through a strategy created by a channel factory
    Factory {
        #[arg(long, default_value = "card")]
        channel: Channel,
        #[arg(long, default_value = "100")]
        amount: Amount,
    },
    /// Validate, pay and issue a receipt with one channel's factory
    Advanced {
        #[arg(long, default_value = "card")]
        channel: Channel,
        #[arg(long, default_value = "100")]
        amount: Amount,
        /// Print the outcome as a single JSON object
        #[arg(long)]
        json: bool,
    },
    /// Show that the singleton accessor always returns the same instance
    Singleton,
    /// Run several payment methods through the extensible processor
    OpenClosed,
    /// Run a payment through the tag-dispatching processor
    TagDispatch {
        /// One of creditCard, paypal, bankTransfer
        #[arg(long)]
        method: String,
        #[arg(long, default_value = "100")]
        amount: Amount,
    },
}

fn amount(value: u32) -> Result<Amount> {
    Amount::new(Decimal::from(value)).into_diagnostic()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Factory { channel, amount } => {
            let factory = factory_for(channel);
            let context = PaymentContext::new(factory.create_payment_strategy());
            let line = context.pay_method(amount).into_diagnostic()?;
            writeln!(out, "{line}").into_diagnostic()?;
        }
        Command::Advanced {
            channel,
            amount,
            json,
        } => {
            let factory = factory_for(channel);
            let context = FactoryPaymentContext::from_factory(factory.as_ref());
            let outcome = context.pay_method(amount);
            if json {
                outcome.write_json(&mut out).into_diagnostic()?;
            } else {
                outcome.write_to(&mut out).into_diagnostic()?;
            }
        }
        Command::Singleton => {
            let s1 = Singleton::get_instance();
            let s2 = Singleton::get_instance();
            writeln!(out, "{}", std::ptr::eq(s1, s2)).into_diagnostic()?;
        }
        Command::OpenClosed => {
            let processor = PaymentProcessor::new();
            writeln!(out, "--- Open/Closed Principle Example ---").into_diagnostic()?;
            processor
                .process(&mut out, &CreditCardPayment, amount(100)?)
                .into_diagnostic()?;
            processor
                .process(&mut out, &PayPalPayment, amount(200)?)
                .into_diagnostic()?;
            processor
                .process(&mut out, &GooglePayPayment, amount(300)?)
                .into_diagnostic()?;
        }
        Command::TagDispatch { method, amount } => {
            TagDispatchProcessor::new()
                .pay(&mut out, &method, amount)
                .into_diagnostic()?;
        }
    }

    Ok(())
}
