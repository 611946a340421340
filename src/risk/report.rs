//! Risk utilization report

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::BTreeMap;

use super::limits::RiskLimits;
use crate::ledger::LedgerSnapshot;

/// Current exposure against configured limits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskMetrics {
    pub total_realized_pnl: Decimal,
    pub max_daily_loss: Decimal,
    /// |total realized PnL| as a percentage of the daily loss limit
    pub risk_utilization_pct: Decimal,
    pub notional_limit: Decimal,
    pub positions: BTreeMap<String, Decimal>,
}

impl RiskMetrics {
    pub fn from_snapshot(limits: &RiskLimits, snapshot: &LedgerSnapshot) -> Self {
        let total = snapshot.total_realized_pnl;
        let utilization = total
            .abs()
            .checked_div(limits.max_daily_loss())
            .and_then(|ratio| ratio.checked_mul(dec!(100)))
            .unwrap_or(Decimal::MAX)
            .round_dp(2);

        Self {
            total_realized_pnl: total,
            max_daily_loss: limits.max_daily_loss(),
            risk_utilization_pct: utilization,
            notional_limit: limits.notional_limit(),
            positions: snapshot.positions(),
        }
    }
}
