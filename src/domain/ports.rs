use super::currency::{CurrencyCode, CurrencyProfile};
use crate::error::Result;

/// Source of currency profiles for the calculator.
pub trait ProfileRegistry: Send + Sync {
    /// Resolves a currency code, failing with `UnsupportedCurrency` when unknown.
    fn profile(&self, code: &str) -> Result<CurrencyProfile>;
    fn supported(&self) -> Vec<CurrencyCode>;
}

pub type ProfileRegistryBox = Box<dyn ProfileRegistry>;
