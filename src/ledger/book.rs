//! Position and realized PnL ledger

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, info};

use super::snapshot::{LedgerSnapshot, SymbolSummary};
use super::types::{normalize_symbol, Fill, InvalidFillError, Side};
use crate::telemetry;

/// Fill that failed validation during a replay
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fill #{index} rejected: {source}")]
pub struct ReplayError {
    /// Zero-based position of the fill in the input
    pub index: usize,
    #[source]
    pub source: InvalidFillError,
}

/// Folds fills into per-symbol positions and realized PnL.
///
/// Realized PnL follows a cash-flow model: a SELL adds `quantity * price`, a
/// BUY subtracts it. There is no cost basis, so an open long shows its full
/// purchase cost as negative PnL until it is sold.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    books: HashMap<String, SymbolSummary>,
    total_realized_pnl: Decimal,
    sequence: u64,
    last_fill_at: Option<DateTime<Utc>>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one confirmed fill.
    ///
    /// Every new total is computed before any is stored, so a fill that would
    /// overflow is rejected with the ledger unchanged.
    pub fn apply_fill(&mut self, fill: &Fill) -> Result<(), InvalidFillError> {
        fill.validate()?;

        let symbol = normalize_symbol(&fill.symbol);
        let overflow = || InvalidFillError::Overflow(symbol.clone());

        let notional = fill.notional()?;
        let pnl_change = match fill.side {
            Side::Sell => notional,
            Side::Buy => -notional,
        };

        let current = self.books.get(&symbol).copied().unwrap_or_default();
        let book = SymbolSummary {
            position: current
                .position
                .checked_add(fill.side.signed(fill.quantity))
                .ok_or_else(overflow)?,
            realized_pnl: current
                .realized_pnl
                .checked_add(pnl_change)
                .ok_or_else(overflow)?,
            volume: current.volume.checked_add(notional).ok_or_else(overflow)?,
        };
        let total = self
            .total_realized_pnl
            .checked_add(pnl_change)
            .ok_or_else(overflow)?;

        self.books.insert(symbol.clone(), book);
        self.total_realized_pnl = total;
        self.sequence += 1;
        self.last_fill_at = Some(fill.timestamp);

        info!(
            symbol = %symbol,
            side = %fill.side,
            quantity = %fill.quantity,
            price = %fill.price,
            position = %book.position,
            realized_pnl = %book.realized_pnl,
            "Fill applied"
        );
        telemetry::record_fill(&symbol, book.realized_pnl, self.total_realized_pnl);

        Ok(())
    }

    /// Apply fills in order, stopping at the first invalid one
    pub fn replay<'a, I>(&mut self, fills: I) -> Result<usize, ReplayError>
    where
        I: IntoIterator<Item = &'a Fill>,
    {
        let mut applied = 0;
        for (index, fill) in fills.into_iter().enumerate() {
            self.apply_fill(fill)
                .map_err(|source| ReplayError { index, source })?;
            applied += 1;
        }
        debug!(applied, "Replay complete");
        Ok(applied)
    }

    /// Signed quantity held, zero when never traded
    pub fn position(&self, symbol: &str) -> Decimal {
        self.books
            .get(&normalize_symbol(symbol))
            .map(|b| b.position)
            .unwrap_or(Decimal::ZERO)
    }

    /// Cumulative realized PnL for a symbol, zero when never traded
    pub fn realized_pnl(&self, symbol: &str) -> Decimal {
        self.books
            .get(&normalize_symbol(symbol))
            .map(|b| b.realized_pnl)
            .unwrap_or(Decimal::ZERO)
    }

    /// Running total across every symbol
    pub fn total_pnl(&self) -> Decimal {
        self.total_realized_pnl
    }

    /// Number of fills applied so far
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Copy of the full state
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            sequence: self.sequence,
            as_of: self.last_fill_at,
            total_realized_pnl: self.total_realized_pnl,
            symbols: self
                .books
                .iter()
                .map(|(symbol, book)| (symbol.clone(), *book))
                .collect(),
        }
    }
}
