use crate::domain::change::{Amount, ChangeResult, CoinCount};
use crate::domain::currency::CurrencyProfile;
use crate::domain::ports::{ProfileRegistry, ProfileRegistryBox};
use crate::error::Result;
use crate::infrastructure::builtin::BuiltinProfiles;
use rust_decimal::Decimal;
use tracing::debug;

/// Breaks `amount` into coins of `profile`, largest denomination first.
///
/// Every denomination is visited exactly once, even after the remainder has
/// reached zero, so the breakdown always has one entry per coin.
pub fn make_change(profile: &CurrencyProfile, amount: Amount) -> ChangeResult {
    let coins = profile.denominations();
    let mut remainder = amount.value();
    let mut breakdown = Vec::with_capacity(coins.len());

    for coin in coins.iter().rev() {
        let count = remainder / coin.value;
        remainder %= coin.value;
        breakdown.push(CoinCount {
            denomination: *coin,
            count,
        });
    }

    ChangeResult::new(profile.code, amount, breakdown)
}

/// Computes change breakdowns for any currency known to its registry.
pub struct ChangeCalculator {
    registry: ProfileRegistryBox,
}

impl Default for ChangeCalculator {
    fn default() -> Self {
        Self::new(Box::new(BuiltinProfiles::new()))
    }
}

impl ChangeCalculator {
    pub fn new(registry: ProfileRegistryBox) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &dyn ProfileRegistry {
        self.registry.as_ref()
    }

    /// Computes change for an amount given in minor units.
    ///
    /// Fails with `UnsupportedCurrency` for unknown codes and with
    /// `InvalidAmount` for negative amounts. No partial result is produced.
    pub fn compute(&self, currency: &str, amount: i64) -> Result<ChangeResult> {
        let profile = self.registry.profile(currency)?;
        let amount = Amount::try_from(amount)?;
        Ok(self.compute_with(&profile, amount))
    }

    /// Computes change for a figure in major units, e.g. `2.87` pounds.
    pub fn compute_major(&self, currency: &str, major: Decimal) -> Result<ChangeResult> {
        let profile = self.registry.profile(currency)?;
        let amount = Amount::from_major(major, profile.minor_units)?;
        Ok(self.compute_with(&profile, amount))
    }

    /// Computes change for a figure in minor units that may arrive as a decimal.
    pub fn compute_decimal(&self, currency: &str, amount: Decimal) -> Result<ChangeResult> {
        let profile = self.registry.profile(currency)?;
        let amount = Amount::try_from(amount)?;
        Ok(self.compute_with(&profile, amount))
    }

    fn compute_with(&self, profile: &CurrencyProfile, amount: Amount) -> ChangeResult {
        let result = make_change(profile, amount);
        debug!(
            currency = %profile.code,
            amount = amount.value(),
            coins = result.coin_count(),
            change = result.description(),
            "computed change"
        );
        result
    }
}

/// Computes the change string for `amount` minor units of `currency`.
///
/// ```
/// assert_eq!(
///     coinchange::compute("USD", 41).unwrap(),
///     "[1 quarters, 1 dimes, 1 nickels, 1 pennies]"
/// );
/// ```
pub fn compute(currency: &str, amount: i64) -> Result<String> {
    ChangeCalculator::default()
        .compute(currency, amount)
        .map(|result| result.to_string())
}
