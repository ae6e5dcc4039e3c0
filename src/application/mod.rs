//! Application layer containing the change-making logic.
//!
//! This module defines the `ChangeCalculator`, which resolves a currency code
//! through a `ProfileRegistry` and breaks an amount into coins using the
//! greedy largest-denomination-first rule.

pub mod calculator;
