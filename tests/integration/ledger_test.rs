//! Integration tests for the ledger and risk gate

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use trade_gate::execution::OrderRequest;
use trade_gate::ledger::{Fill, Ledger, Side};
use trade_gate::risk::{DecisionReason, InvalidOrderError, RiskGate, RiskLimits};

fn limits() -> RiskLimits {
    RiskLimits::new(dec!(1000), dec!(0.1), dec!(10000)).unwrap()
}

#[test]
fn test_total_pnl_matches_symbol_sum_at_every_step() {
    let mut ledger = Ledger::new();
    let symbols = ["BTCUSDT", "ETHUSDT", "SOLUSDT"];

    for i in 0..60u32 {
        let symbol = symbols[(i % 3) as usize];
        let side = if i % 4 == 0 { Side::Sell } else { Side::Buy };
        let quantity = Decimal::from(i % 7 + 1) / dec!(4);
        let price = Decimal::from(100 + i * 13) / dec!(10);
        ledger
            .apply_fill(&Fill::new(symbol, side, quantity, price))
            .unwrap();

        let sum: Decimal = symbols.iter().map(|s| ledger.realized_pnl(s)).sum();
        assert_eq!(ledger.total_pnl(), sum, "diverged after fill {i}");
    }
}

#[test]
fn test_buy_then_sell_position_and_pnl() {
    let mut ledger = Ledger::new();

    ledger
        .apply_fill(&Fill::new("BTCUSDT", Side::Buy, dec!(2), dec!(100)))
        .unwrap();
    assert_eq!(ledger.position("BTCUSDT"), dec!(2));

    ledger
        .apply_fill(&Fill::new("BTCUSDT", Side::Sell, dec!(3), dec!(100)))
        .unwrap();
    assert_eq!(ledger.position("BTCUSDT"), dec!(-1));

    let mut ledger = Ledger::new();
    ledger
        .apply_fill(&Fill::new("BTCUSDT", Side::Buy, dec!(1), dec!(100)))
        .unwrap();
    ledger
        .apply_fill(&Fill::new("BTCUSDT", Side::Sell, dec!(1), dec!(150)))
        .unwrap();
    assert_eq!(ledger.realized_pnl("BTCUSDT"), dec!(50));
}

#[test]
fn test_gate_reports_only_daily_loss_when_both_limits_breached() {
    let mut ledger = Ledger::new();
    ledger
        .apply_fill(&Fill::new("ETHUSDT", Side::Buy, dec!(1), dec!(1200)))
        .unwrap();

    let gate = RiskGate::new(limits());
    let order = OrderRequest::market("BTCUSDT", Side::Buy, dec!(15), dec!(100));
    let decision = gate.evaluate(&ledger, &order).unwrap();

    assert!(!decision.approved);
    assert_eq!(decision.reason, DecisionReason::DailyLossLimitExceeded);
    assert_eq!(decision.reason.to_string(), "daily loss limit exceeded");
}

#[test]
fn test_gate_order_size_with_healthy_pnl() {
    let ledger = Ledger::new();
    let gate = RiskGate::new(limits());
    let order = OrderRequest::market("BTCUSDT", Side::Buy, dec!(15), dec!(100));

    let decision = gate.evaluate(&ledger, &order).unwrap();
    assert_eq!(decision.reason.to_string(), "position size too large");
}

#[test]
fn test_gate_zero_inputs_are_errors() {
    let ledger = Ledger::new();
    let gate = RiskGate::new(limits());

    let zero_qty = OrderRequest::market("BTCUSDT", Side::Buy, dec!(0), dec!(100));
    assert!(matches!(
        gate.evaluate(&ledger, &zero_qty),
        Err(InvalidOrderError::NonPositiveQuantity(_))
    ));

    let zero_px = OrderRequest::market("BTCUSDT", Side::Sell, dec!(1), dec!(0));
    assert!(matches!(
        gate.evaluate(&ledger, &zero_px),
        Err(InvalidOrderError::NonPositivePrice(_))
    ));
}
