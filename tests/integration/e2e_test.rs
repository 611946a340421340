//! End-to-end integration tests

use std::io::Write;

use rust_decimal_macros::dec;
use tempfile::NamedTempFile;
use trade_gate::config::Config;
use trade_gate::data;
use trade_gate::desk::{SubmitOutcome, TradingDesk};
use trade_gate::execution::PaperEngine;
use trade_gate::risk::InvalidOrderError;

#[test]
fn test_config_example_loads() {
    let config = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example")).unwrap();
    assert_eq!(config.risk.max_daily_loss, dec!(1000));
    assert!(config.market.supported_symbols.contains(&"BTCUSDT".to_string()));
}

#[tokio::test]
async fn test_replay_then_paper_orders() {
    let mut fills = NamedTempFile::new().unwrap();
    writeln!(
        fills,
        r#"{{"symbol":"ETHUSDT","side":"SELL","quantity":"0.1","price":"2000"}}"#
    )
    .unwrap();

    let mut orders = NamedTempFile::new().unwrap();
    writeln!(
        orders,
        r#"{{"symbol":"BTCUSDT","side":"BUY","type":"LIMIT","quantity":"0.01","price":"60000"}}
{{"symbol":"BTCUSDT","side":"BUY","quantity":"0.02","price":"60000"}}
{{"symbol":"SHIBUSDT","side":"BUY","quantity":"10","price":"0.00001"}}"#
    )
    .unwrap();

    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    let desk = TradingDesk::from_config(&config).unwrap();
    let engine = PaperEngine::new();

    desk.apply_fills(&data::read_fills(fills.path()).unwrap())
        .await
        .unwrap();
    assert_eq!(desk.total_pnl(), dec!(200));

    let orders = data::read_orders(orders.path()).unwrap();
    assert_eq!(orders.len(), 3);
    let mut orders = orders.into_iter();

    // 600 notional fits under the 1000 limit
    let first = desk.submit(&engine, orders.next().unwrap()).await.unwrap();
    assert!(first.is_executed());

    // 1200 notional does not
    let second = desk.submit(&engine, orders.next().unwrap()).await.unwrap();
    assert!(matches!(second, SubmitOutcome::Rejected(_)));

    // Not in the configured universe
    let third = desk.submit(&engine, orders.next().unwrap()).await.unwrap_err();
    assert!(matches!(
        third,
        trade_gate::desk::DeskError::InvalidOrder(InvalidOrderError::UnsupportedSymbol(_))
    ));

    let snapshot = desk.snapshot();
    assert_eq!(snapshot.sequence, 2);
    assert_eq!(snapshot.position("BTCUSDT"), dec!(0.01));
    assert_eq!(snapshot.total_realized_pnl, dec!(-400));

    let metrics = desk.risk_metrics();
    assert_eq!(metrics.risk_utilization_pct, dec!(40));
}
