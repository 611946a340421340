//! Trading desk
//!
//! Single owner of the ledger. Every mutation and every gate evaluation runs
//! under one async mutex, so an approval and the fills it leads to are applied
//! without any other order slipping in between. Readers use the snapshot
//! published after each mutation and never wait on the lock.

use rust_decimal::Decimal;
use thiserror::Error;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::execution::{ExecutionEngine, ExecutionReport, OrderRequest};
use crate::ledger::{Fill, InvalidFillError, Ledger, LedgerSnapshot, ReplayError};
use crate::market::SymbolUniverse;
use crate::risk::{
    InvalidLimitsError, InvalidOrderError, RiskDecision, RiskGate, RiskLimits, RiskMetrics,
};

/// Errors surfaced by the desk
#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    InvalidOrder(#[from] InvalidOrderError),
    #[error(transparent)]
    InvalidFill(#[from] InvalidFillError),
    #[error("execution failed: {0:#}")]
    Execution(anyhow::Error),
}

/// Result of routing one order through the desk
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// The gate said no; nothing reached the engine
    Rejected(RiskDecision),
    /// The engine executed the order and its fills are in the ledger
    Executed(ExecutionReport),
}

impl SubmitOutcome {
    pub fn is_executed(&self) -> bool {
        matches!(self, SubmitOutcome::Executed(_))
    }
}

pub struct TradingDesk {
    ledger: Mutex<Ledger>,
    gate: RiskGate,
    universe: SymbolUniverse,
    snapshots: watch::Sender<LedgerSnapshot>,
}

impl TradingDesk {
    pub fn new(gate: RiskGate, universe: SymbolUniverse) -> Self {
        let (snapshots, _) = watch::channel(LedgerSnapshot::default());
        Self {
            ledger: Mutex::new(Ledger::new()),
            gate,
            universe,
            snapshots,
        }
    }

    /// Create from Config
    pub fn from_config(config: &Config) -> Result<Self, InvalidLimitsError> {
        let limits = RiskLimits::from_config(&config.risk)?;
        Ok(Self::new(
            RiskGate::new(limits),
            SymbolUniverse::from_config(&config.market),
        ))
    }

    pub fn gate(&self) -> &RiskGate {
        &self.gate
    }

    /// Evaluate an order without submitting it
    pub async fn evaluate(&self, order: &OrderRequest) -> Result<RiskDecision, InvalidOrderError> {
        self.universe.check(&order.symbol)?;
        let ledger = self.ledger.lock().await;
        self.gate.evaluate(&ledger, order)
    }

    /// Apply a fill confirmed outside the desk
    pub async fn apply_fill(&self, fill: &Fill) -> Result<(), InvalidFillError> {
        let mut ledger = self.ledger.lock().await;
        ledger.apply_fill(fill)?;
        self.publish(&ledger);
        Ok(())
    }

    /// Apply a batch of fills, stopping at the first invalid one
    pub async fn apply_fills(&self, fills: &[Fill]) -> Result<usize, ReplayError> {
        let mut ledger = self.ledger.lock().await;
        let result = ledger.replay(fills);
        self.publish(&ledger);
        result
    }

    /// Evaluate, execute, and book an order as one step.
    ///
    /// The ledger lock is held until the engine answers. If the engine fails
    /// or this future is dropped first, the ledger is left untouched. The same
    /// holds when any returned fill cannot be booked.
    pub async fn submit<E>(&self, engine: &E, order: OrderRequest) -> Result<SubmitOutcome, DeskError>
    where
        E: ExecutionEngine + ?Sized,
    {
        self.universe.check(&order.symbol)?;

        let mut ledger = self.ledger.lock().await;
        let decision = self.gate.evaluate(&ledger, &order)?;
        if !decision.approved {
            return Ok(SubmitOutcome::Rejected(decision));
        }

        let symbol = order.symbol.clone();
        let report = match engine.submit_order(order).await {
            Ok(report) => report,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Order submission failed, ledger unchanged");
                return Err(DeskError::Execution(e));
            }
        };

        let mut staged = ledger.clone();
        if let Err(e) = staged.replay(&report.fills) {
            warn!(
                order_id = %report.order_id,
                symbol = %symbol,
                index = e.index,
                error = %e.source,
                "Executed order returned a fill the ledger cannot book, ledger unchanged"
            );
            return Err(DeskError::InvalidFill(e.source));
        }
        *ledger = staged;
        self.publish(&ledger);

        info!(
            order_id = %report.order_id,
            symbol = %symbol,
            fills = report.fills.len(),
            filled = %report.filled_quantity(),
            "Order executed"
        );
        Ok(SubmitOutcome::Executed(report))
    }

    /// Latest consistent view of the ledger
    pub fn snapshot(&self) -> LedgerSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified after every ledger mutation
    pub fn subscribe(&self) -> watch::Receiver<LedgerSnapshot> {
        self.snapshots.subscribe()
    }

    pub fn position(&self, symbol: &str) -> Decimal {
        self.snapshots.borrow().position(symbol)
    }

    pub fn realized_pnl(&self, symbol: &str) -> Decimal {
        self.snapshots.borrow().realized_pnl(symbol)
    }

    pub fn total_pnl(&self) -> Decimal {
        self.snapshots.borrow().total_realized_pnl
    }

    pub fn risk_metrics(&self) -> RiskMetrics {
        self.gate.metrics(&self.snapshot())
    }

    fn publish(&self, ledger: &Ledger) {
        let snapshot = ledger.snapshot();
        debug!(sequence = snapshot.sequence, "Publishing ledger snapshot");
        self.snapshots.send_replace(snapshot);
    }
}

impl Default for TradingDesk {
    fn default() -> Self {
        Self::new(RiskGate::default(), SymbolUniverse::any())
    }
}
