//! Application layer wiring the payment ports together.
//!
//! `context` holds the factory-driven payment contexts, `processor` the
//! open/closed comparison and `singleton` the process-wide instance holder.

pub mod context;
pub mod processor;
pub mod singleton;
