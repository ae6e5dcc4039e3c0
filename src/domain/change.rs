use super::currency::{CurrencyCode, Denomination};
use crate::error::ChangeError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::fmt;

/// A non-negative amount of money in the currency's smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub fn new(minor: u64) -> Self {
        Self(minor)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Converts a major-unit figure (e.g. `2.87` pounds) into minor units.
    ///
    /// Fails if the figure is negative or carries more fractional digits than
    /// `minor_units` allows.
    pub fn from_major(major: Decimal, minor_units: u32) -> Result<Self, ChangeError> {
        let scale = Decimal::from(10u64.pow(minor_units));
        let minor = major.checked_mul(scale).ok_or_else(|| {
            ChangeError::InvalidAmount(format!("{major} is out of range"))
        })?;
        if !minor.fract().is_zero() {
            return Err(ChangeError::InvalidAmount(format!(
                "{major} has more than {minor_units} decimal places"
            )));
        }
        Self::try_from(minor)
    }
}

impl TryFrom<i64> for Amount {
    type Error = ChangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| ChangeError::InvalidAmount(format!("{value} is negative")))
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ChangeError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_zero() {
            return Ok(Self::ZERO);
        }
        if value.is_sign_negative() {
            return Err(ChangeError::InvalidAmount(format!("{value} is negative")));
        }
        if !value.fract().is_zero() {
            return Err(ChangeError::InvalidAmount(format!(
                "{value} is not a whole number of minor units"
            )));
        }
        value
            .to_u64()
            .map(Self)
            .ok_or_else(|| ChangeError::InvalidAmount(format!("{value} is out of range")))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many coins of one denomination make up part of the change.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct CoinCount {
    #[serde(flatten)]
    pub denomination: Denomination,
    pub count: u64,
}

impl CoinCount {
    /// Value contributed by these coins, in minor units.
    pub fn subtotal(&self) -> u64 {
        self.count * self.denomination.value
    }
}

/// The breakdown of an amount into coins.
///
/// `breakdown` holds one entry per denomination, zeros included, in the
/// order the denominations were consumed (largest first). `change` is the
/// bracketed description of the coins actually used.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct ChangeResult {
    pub currency: CurrencyCode,
    pub amount: Amount,
    change: String,
    breakdown: Vec<CoinCount>,
}

impl ChangeResult {
    pub fn new(currency: CurrencyCode, amount: Amount, breakdown: Vec<CoinCount>) -> Self {
        let fragments: Vec<String> = breakdown
            .iter()
            .filter(|c| c.count > 0)
            .map(|c| format!("{} {}", c.count, c.denomination.name))
            .collect();
        let change = format!("[{}]", fragments.join(", "));

        Self {
            currency,
            amount,
            change,
            breakdown,
        }
    }

    /// The result string, e.g. `[1 quarters, 1 dimes, 1 nickels, 1 pennies]`.
    pub fn description(&self) -> &str {
        &self.change
    }

    /// Every denomination with its count, zeros included, largest first.
    pub fn breakdown(&self) -> &[CoinCount] {
        &self.breakdown
    }

    /// Per-denomination counts in consumption order.
    pub fn counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.breakdown.iter().map(|c| c.count)
    }

    /// `(count, name)` pairs for the denominations actually handed out.
    pub fn used(&self) -> impl Iterator<Item = (u64, &'static str)> + '_ {
        self.breakdown
            .iter()
            .filter(|c| c.count > 0)
            .map(|c| (c.count, c.denomination.name))
    }

    /// Sum of count times value over the breakdown.
    pub fn total(&self) -> u64 {
        self.breakdown.iter().map(CoinCount::subtotal).sum()
    }

    /// Number of coins handed out.
    pub fn coin_count(&self) -> u64 {
        self.breakdown.iter().map(|c| c.count).sum()
    }
}

impl fmt::Display for ChangeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn coin(value: u64, name: &'static str, count: u64) -> CoinCount {
        CoinCount {
            denomination: Denomination::new(value, name),
            count,
        }
    }

    #[test]
    fn test_amount_from_signed() {
        assert_eq!(Amount::try_from(41i64).unwrap(), Amount::new(41));
        assert_eq!(Amount::try_from(0i64).unwrap(), Amount::ZERO);
        assert!(matches!(
            Amount::try_from(-1i64),
            Err(ChangeError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_amount_from_decimal() {
        assert_eq!(Amount::try_from(dec!(287)).unwrap(), Amount::new(287));
        assert_eq!(Amount::try_from(dec!(0.00)).unwrap(), Amount::ZERO);
        assert!(matches!(
            Amount::try_from(dec!(2.5)),
            Err(ChangeError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::try_from(dec!(-3)),
            Err(ChangeError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_amount_from_major_units() {
        assert_eq!(Amount::from_major(dec!(2.87), 2).unwrap(), Amount::new(287));
        assert_eq!(Amount::from_major(dec!(0.99), 2).unwrap(), Amount::new(99));
        assert_eq!(Amount::from_major(dec!(3), 2).unwrap(), Amount::new(300));
        assert!(matches!(
            Amount::from_major(dec!(0.415), 2),
            Err(ChangeError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::from_major(dec!(-1.00), 2),
            Err(ChangeError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_description_omits_zero_counts() {
        let result = ChangeResult::new(
            CurrencyCode::Usd,
            Amount::new(99),
            vec![
                coin(25, "quarters", 3),
                coin(10, "dimes", 2),
                coin(5, "nickels", 0),
                coin(1, "pennies", 4),
            ],
        );

        assert_eq!(result.description(), "[3 quarters, 2 dimes, 4 pennies]");
        assert_eq!(result.to_string(), result.description());
        assert_eq!(result.counts().collect::<Vec<_>>(), vec![3, 2, 0, 4]);
        assert_eq!(result.used().count(), 3);
        assert_eq!(result.total(), 99);
        assert_eq!(result.coin_count(), 9);
    }

    #[test]
    fn test_empty_breakdown_description() {
        let result = ChangeResult::new(
            CurrencyCode::Gbp,
            Amount::ZERO,
            vec![coin(2, "two_pence", 0), coin(1, "pennies", 0)],
        );
        assert_eq!(result.description(), "[]");
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_change_result_serialization() {
        let result = ChangeResult::new(
            CurrencyCode::Usd,
            Amount::new(6),
            vec![coin(5, "nickels", 1), coin(1, "pennies", 1)],
        );
        let json: serde_json::Value = serde_json::to_value(&result).unwrap();

        assert_eq!(json["currency"], "USD");
        assert_eq!(json["amount"], 6);
        assert_eq!(json["change"], "[1 nickels, 1 pennies]");
        assert_eq!(json["breakdown"][0]["value"], 5);
        assert_eq!(json["breakdown"][0]["name"], "nickels");
        assert_eq!(json["breakdown"][1]["count"], 1);
    }
}
