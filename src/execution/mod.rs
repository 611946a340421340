//! Execution engine module
//!
//! Order submission collaborators consulted by the trading desk

mod paper;
mod types;

pub use paper::PaperEngine;
pub use types::{ExecutionReport, OrderId, OrderRecord, OrderRequest, OrderType};

use crate::ledger::Fill;
use async_trait::async_trait;

/// Trait for execution engine implementations
#[async_trait]
pub trait ExecutionEngine: Send + Sync {
    /// Submit an order and report the fills it produced
    async fn submit_order(&self, order: OrderRequest) -> anyhow::Result<ExecutionReport>;
    /// Cancel an order
    async fn cancel_order(&self, id: OrderId) -> anyhow::Result<()>;
    /// Get all fills
    async fn get_fills(&self) -> anyhow::Result<Vec<Fill>>;
}
