//! Integration tests for the trading desk

use std::sync::Arc;

use rust_decimal_macros::dec;
use trade_gate::desk::{SubmitOutcome, TradingDesk};
use trade_gate::execution::{ExecutionEngine, OrderRequest, PaperEngine};
use trade_gate::ledger::{Fill, Side};
use trade_gate::market::SymbolUniverse;
use trade_gate::risk::{DecisionReason, RiskGate, RiskLimits};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submits_never_breach_position_limit() {
    // Notional limit is 1000; each order is 100, so at most 10 buys fit.
    let desk = Arc::new(TradingDesk::new(
        RiskGate::new(RiskLimits::new(dec!(1000000), dec!(0.1), dec!(10000)).unwrap()),
        SymbolUniverse::any(),
    ));
    let engine = Arc::new(PaperEngine::new());

    let mut handles = vec![];
    for _ in 0..32 {
        let desk = Arc::clone(&desk);
        let engine = Arc::clone(&engine);
        handles.push(tokio::spawn(async move {
            desk.submit(
                engine.as_ref(),
                OrderRequest::market("BTCUSDT", Side::Buy, dec!(1), dec!(100)),
            )
            .await
            .unwrap()
        }));
    }

    let mut executed = 0;
    for handle in handles {
        match handle.await.unwrap() {
            SubmitOutcome::Executed(_) => executed += 1,
            SubmitOutcome::Rejected(decision) => {
                assert_eq!(decision.reason, DecisionReason::PositionLimitExceeded)
            }
        }
    }

    assert_eq!(executed, 10);
    assert_eq!(desk.position("BTCUSDT"), dec!(10));
    assert_eq!(engine.get_fills().await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_snapshot_reads_do_not_wait_for_lock() {
    let desk = TradingDesk::default();
    desk.apply_fill(&Fill::new("BTCUSDT", Side::Buy, dec!(1), dec!(100)))
        .await
        .unwrap();

    let before = desk.snapshot();
    let again = desk.snapshot();
    assert_eq!(before, again);
    assert_eq!(before.sequence, 1);
    assert_eq!(desk.realized_pnl("BTCUSDT"), dec!(-100));
}

#[tokio::test]
async fn test_dropped_submission_leaves_ledger_untouched() {
    use async_trait::async_trait;
    use trade_gate::execution::{ExecutionReport, OrderId};

    struct StalledEngine;

    #[async_trait]
    impl ExecutionEngine for StalledEngine {
        async fn submit_order(&self, _order: OrderRequest) -> anyhow::Result<ExecutionReport> {
            std::future::pending().await
        }

        async fn cancel_order(&self, _id: OrderId) -> anyhow::Result<()> {
            Ok(())
        }

        async fn get_fills(&self) -> anyhow::Result<Vec<Fill>> {
            Ok(vec![])
        }
    }

    let desk = TradingDesk::default();
    let submit = desk.submit(
        &StalledEngine,
        OrderRequest::market("BTCUSDT", Side::Buy, dec!(1), dec!(100)),
    );
    let timed_out = tokio::time::timeout(std::time::Duration::from_millis(20), submit).await;
    assert!(timed_out.is_err());

    assert_eq!(desk.snapshot().sequence, 0);

    // The lock was released with the dropped future.
    let decision = desk
        .evaluate(&OrderRequest::market("BTCUSDT", Side::Buy, dec!(1), dec!(100)))
        .await
        .unwrap();
    assert!(decision.approved);
}
