//! Domain layer: currencies, amounts and change breakdowns.

pub mod change;
pub mod currency;
pub mod ports;
