//! Point-in-time ledger views

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::types::normalize_symbol;

/// Aggregate state for one symbol
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSummary {
    /// Net signed quantity, positive when long
    pub position: Decimal,
    /// Cumulative realized PnL
    pub realized_pnl: Decimal,
    /// Traded notional across both sides
    pub volume: Decimal,
}

/// Immutable copy of the full ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Number of fills applied when the snapshot was taken
    pub sequence: u64,
    /// Timestamp of the last applied fill
    pub as_of: Option<DateTime<Utc>>,
    pub total_realized_pnl: Decimal,
    pub symbols: BTreeMap<String, SymbolSummary>,
}

impl LedgerSnapshot {
    pub fn position(&self, symbol: &str) -> Decimal {
        self.symbols
            .get(&normalize_symbol(symbol))
            .map(|s| s.position)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn realized_pnl(&self, symbol: &str) -> Decimal {
        self.symbols
            .get(&normalize_symbol(symbol))
            .map(|s| s.realized_pnl)
            .unwrap_or(Decimal::ZERO)
    }

    /// Signed positions keyed by symbol
    pub fn positions(&self) -> BTreeMap<String, Decimal> {
        self.symbols
            .iter()
            .map(|(symbol, s)| (symbol.clone(), s.position))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
