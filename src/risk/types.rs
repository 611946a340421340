//! Risk decision and error types

use crate::ledger::UnknownSide;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Malformed order handed to the gate. Distinct from a risk rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOrderError {
    #[error("order quantity must be positive, got {0}")]
    NonPositiveQuantity(Decimal),
    #[error("order price must be positive, got {0}")]
    NonPositivePrice(Decimal),
    #[error("order price is required")]
    MissingPrice,
    #[error(transparent)]
    UnknownSide(#[from] UnknownSide),
    #[error("unknown order type {0:?}, expected MARKET or LIMIT")]
    UnknownOrderType(String),
    #[error("order symbol is empty")]
    EmptySymbol,
    #[error("symbol {0} is not supported")]
    UnsupportedSymbol(String),
    #[error("order on {0} overflows decimal range")]
    Overflow(String),
}

/// Invalid limit configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidLimitsError {
    #[error("max daily loss must be positive, got {0}")]
    MaxDailyLoss(Decimal),
    #[error("max position fraction must be positive, got {0}")]
    MaxPositionFraction(Decimal),
    #[error("reference account size must be positive, got {0}")]
    ReferenceAccountSize(Decimal),
    #[error("notional limit overflows decimal range")]
    NotionalOverflow,
}

/// Why the gate approved or rejected an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    Approved,
    DailyLossLimitExceeded,
    PositionSizeTooLarge,
    PositionLimitExceeded,
}

impl DecisionReason {
    pub fn message(self) -> &'static str {
        match self {
            DecisionReason::Approved => "order approved",
            DecisionReason::DailyLossLimitExceeded => "daily loss limit exceeded",
            DecisionReason::PositionSizeTooLarge => "position size too large",
            DecisionReason::PositionLimitExceeded => "position limit would be exceeded",
        }
    }

    /// Short label for metrics
    pub fn label(self) -> &'static str {
        match self {
            DecisionReason::Approved => "approved",
            DecisionReason::DailyLossLimitExceeded => "daily_loss",
            DecisionReason::PositionSizeTooLarge => "order_size",
            DecisionReason::PositionLimitExceeded => "position_limit",
        }
    }
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of a pre-trade check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDecision {
    pub approved: bool,
    pub reason: DecisionReason,
}

impl RiskDecision {
    pub fn approve() -> Self {
        Self {
            approved: true,
            reason: DecisionReason::Approved,
        }
    }

    pub fn reject(reason: DecisionReason) -> Self {
        Self {
            approved: false,
            reason,
        }
    }
}

impl fmt::Display for RiskDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.approved { "APPROVED" } else { "REJECTED" };
        write!(f, "{verdict}: {}", self.reason)
    }
}
