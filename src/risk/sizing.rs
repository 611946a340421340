//! Stop-distance position sizing
//!
//! Sizes a position so that hitting the stop loses a fixed percentage of the
//! balance.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal places kept on computed sizes
const SIZE_DP: u32 = 8;

/// Risk-per-trade sizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopLossSizer {
    /// Percentage of balance risked per trade (e.g., 1 = 1%)
    pub risk_pct: Decimal,
}

impl StopLossSizer {
    pub fn new(risk_pct: Decimal) -> Self {
        Self { risk_pct }
    }

    /// Quantity to buy at `entry` with a protective stop at `stop`.
    ///
    /// Returns zero when the stop is not below the entry, any input is
    /// non-positive, or the size does not fit in a decimal.
    pub fn calculate(&self, balance: Decimal, entry: Decimal, stop: Decimal) -> Decimal {
        if stop >= entry
            || balance <= Decimal::ZERO
            || self.risk_pct <= Decimal::ZERO
            || stop <= Decimal::ZERO
        {
            return Decimal::ZERO;
        }

        let per_unit_risk = entry - stop;
        self.checked_risk_amount(balance)
            .and_then(|risk| risk.checked_div(per_unit_risk))
            .map(|size| size.round_dp(SIZE_DP))
            .unwrap_or(Decimal::ZERO)
    }

    /// Amount of balance put at risk, saturating at the decimal range
    pub fn risk_amount(&self, balance: Decimal) -> Decimal {
        self.checked_risk_amount(balance).unwrap_or(Decimal::MAX)
    }

    fn checked_risk_amount(&self, balance: Decimal) -> Option<Decimal> {
        (self.risk_pct / dec!(100)).checked_mul(balance)
    }
}

impl Default for StopLossSizer {
    fn default() -> Self {
        Self { risk_pct: dec!(1) }
    }
}
