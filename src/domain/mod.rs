//! Domain types and the ports (traits) every payment channel implements.

pub mod amount;
pub mod channel;
pub mod ports;
