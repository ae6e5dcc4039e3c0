use crate::domain::currency::{CurrencyCode, CurrencyProfile, Denomination};
use crate::domain::ports::ProfileRegistry;
use crate::error::Result;

const USD_COINS: &[Denomination] = &[
    Denomination::new(1, "pennies"),
    Denomination::new(5, "nickels"),
    Denomination::new(10, "dimes"),
    Denomination::new(25, "quarters"),
];

const GBP_COINS: &[Denomination] = &[
    Denomination::new(1, "pennies"),
    Denomination::new(2, "two_pence"),
    Denomination::new(5, "five_pence"),
    Denomination::new(10, "ten_pence"),
    Denomination::new(20, "twenty_pence"),
    Denomination::new(50, "fifty_pence"),
    Denomination::new(100, "pounds"),
    Denomination::new(200, "two_pounds"),
];

pub const USD: CurrencyProfile = CurrencyProfile::new(CurrencyCode::Usd, 2, USD_COINS);
pub const GBP: CurrencyProfile = CurrencyProfile::new(CurrencyCode::Gbp, 2, GBP_COINS);

/// The fixed coin sets for USD and GBP.
///
/// Profiles are `'static` tables, so every lookup hands out its own copy and
/// nothing is shared between computations.
#[derive(Default, Clone, Copy)]
pub struct BuiltinProfiles;

impl BuiltinProfiles {
    pub fn new() -> Self {
        Self
    }

    pub fn get(code: CurrencyCode) -> CurrencyProfile {
        match code {
            CurrencyCode::Usd => USD,
            CurrencyCode::Gbp => GBP,
        }
    }
}

impl ProfileRegistry for BuiltinProfiles {
    fn profile(&self, code: &str) -> Result<CurrencyProfile> {
        let code: CurrencyCode = code.parse()?;
        Ok(Self::get(code))
    }

    fn supported(&self) -> Vec<CurrencyCode> {
        vec![CurrencyCode::Usd, CurrencyCode::Gbp]
    }
}
