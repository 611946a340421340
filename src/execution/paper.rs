//! Paper trading execution engine

use super::{ExecutionEngine, ExecutionReport, OrderId, OrderRequest};
use crate::ledger::Fill;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Paper trading engine that fills every order in full at its price
#[derive(Default)]
pub struct PaperEngine {
    fills: Arc<RwLock<Vec<Fill>>>,
}

impl PaperEngine {
    /// Create a new paper trading engine
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExecutionEngine for PaperEngine {
    async fn submit_order(&self, order: OrderRequest) -> anyhow::Result<ExecutionReport> {
        let order_id = OrderId::new_v4();

        let fill = Fill {
            symbol: order.symbol,
            side: order.side,
            quantity: order.quantity,
            price: order.price,
            timestamp: Utc::now(),
        };

        let mut fills = self.fills.write().await;
        fills.push(fill.clone());

        tracing::info!(?order_id, symbol = %fill.symbol, "Paper order filled");
        Ok(ExecutionReport {
            order_id,
            fills: vec![fill],
        })
    }

    async fn cancel_order(&self, id: OrderId) -> anyhow::Result<()> {
        tracing::info!(?id, "Paper order cancelled");
        Ok(())
    }

    async fn get_fills(&self) -> anyhow::Result<Vec<Fill>> {
        let fills = self.fills.read().await;
        Ok(fills.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Side;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_paper_engine_fill() {
        let engine = PaperEngine::new();
        let order = OrderRequest::limit("BTCUSDT", Side::Buy, dec!(0.5), dec!(40000));

        let report = engine.submit_order(order).await.unwrap();
        let fills = engine.get_fills().await.unwrap();

        assert_eq!(fills.len(), 1);
        assert_eq!(report.fills, fills);
        assert_eq!(report.filled_quantity(), dec!(0.5));
        assert_eq!(fills[0].price, dec!(40000));
    }

    #[tokio::test]
    async fn test_paper_engine_cancel() {
        let engine = PaperEngine::new();
        let result = engine.cancel_order(OrderId::new_v4()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_paper_engine_multiple_orders() {
        let engine = PaperEngine::new();

        engine
            .submit_order(OrderRequest::market("ETHUSDT", Side::Buy, dec!(1), dec!(2000)))
            .await
            .unwrap();
        engine
            .submit_order(OrderRequest::market("ETHUSDT", Side::Sell, dec!(1), dec!(2100)))
            .await
            .unwrap();

        let fills = engine.get_fills().await.unwrap();
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].side, Side::Buy);
        assert_eq!(fills[1].side, Side::Sell);
    }
}
