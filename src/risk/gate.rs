//! Pre-trade risk gate

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::limits::RiskLimits;
use super::report::RiskMetrics;
use super::types::{DecisionReason, InvalidOrderError, RiskDecision};
use crate::execution::OrderRequest;
use crate::ledger::{normalize_symbol, Ledger, LedgerSnapshot};
use crate::telemetry;

/// Approves or rejects orders against static limits and current ledger state.
///
/// Checks run in a fixed order and the first failure decides the reason:
/// daily loss, order notional, then prospective position notional.
/// Evaluation never mutates the ledger.
#[derive(Debug, Clone, Default)]
pub struct RiskGate {
    limits: RiskLimits,
}

impl RiskGate {
    pub fn new(limits: RiskLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &RiskLimits {
        &self.limits
    }

    /// Evaluate a proposed order
    pub fn evaluate(
        &self,
        ledger: &Ledger,
        order: &OrderRequest,
    ) -> Result<RiskDecision, InvalidOrderError> {
        order.validate()?;

        let reason = self.check(
            ledger.total_pnl(),
            ledger.position(&order.symbol),
            order,
        )?;
        let decision = match reason {
            DecisionReason::Approved => RiskDecision::approve(),
            other => RiskDecision::reject(other),
        };

        if decision.approved {
            debug!(
                symbol = %order.symbol,
                side = %order.side,
                quantity = %order.quantity,
                price = %order.price,
                "Order approved"
            );
        } else {
            warn!(
                symbol = %order.symbol,
                side = %order.side,
                quantity = %order.quantity,
                price = %order.price,
                reason = %decision.reason,
                "Order rejected"
            );
        }
        telemetry::record_decision(decision.reason);

        Ok(decision)
    }

    fn check(
        &self,
        total_pnl: Decimal,
        current_position: Decimal,
        order: &OrderRequest,
    ) -> Result<DecisionReason, InvalidOrderError> {
        if total_pnl <= -self.limits.max_daily_loss() {
            return Ok(DecisionReason::DailyLossLimitExceeded);
        }

        let limit = self.limits.notional_limit();
        if order.notional()? > limit {
            return Ok(DecisionReason::PositionSizeTooLarge);
        }

        let prospective = current_position
            .checked_add(order.side.signed(order.quantity))
            .and_then(|position| position.checked_mul(order.price))
            .ok_or_else(|| InvalidOrderError::Overflow(normalize_symbol(&order.symbol)))?;
        if prospective.abs() > limit {
            return Ok(DecisionReason::PositionLimitExceeded);
        }

        Ok(DecisionReason::Approved)
    }

    /// Risk utilization report for a ledger snapshot
    pub fn metrics(&self, snapshot: &LedgerSnapshot) -> RiskMetrics {
        RiskMetrics::from_snapshot(&self.limits, snapshot)
    }
}
