use crate::error::ChangeError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Currencies with a known coin set.
#[derive(Debug, Serialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Gbp,
}

impl CurrencyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Gbp => "GBP",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = ChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.eq_ignore_ascii_case("USD") {
            Ok(CurrencyCode::Usd)
        } else if code.eq_ignore_ascii_case("GBP") {
            Ok(CurrencyCode::Gbp)
        } else {
            Err(ChangeError::UnsupportedCurrency(code.to_string()))
        }
    }
}

/// A single coin value, in minor units, and the name it is reported under.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct Denomination {
    pub value: u64,
    pub name: &'static str,
}

impl Denomination {
    pub const fn new(value: u64, name: &'static str) -> Self {
        Self { value, name }
    }
}

/// The coin set of one currency.
///
/// Denominations are held in ascending order and never mutated; the
/// calculator walks them from the last index down to the first.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CurrencyProfile {
    pub code: CurrencyCode,
    /// Number of decimal places between the major and the minor unit.
    pub minor_units: u32,
    denominations: &'static [Denomination],
}

impl CurrencyProfile {
    pub const fn new(
        code: CurrencyCode,
        minor_units: u32,
        denominations: &'static [Denomination],
    ) -> Self {
        Self {
            code,
            minor_units,
            denominations,
        }
    }

    /// Denominations in ascending order of value.
    pub fn denominations(&self) -> &'static [Denomination] {
        self.denominations
    }

    /// Looks up the coin value reported under `name`.
    pub fn value_of(&self, name: &str) -> Option<u64> {
        self.denominations
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value)
    }
}
