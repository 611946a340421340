//! Prometheus metrics

use std::net::{Ipv4Addr, SocketAddr};

use ::metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::risk::DecisionReason;

const FILLS_TOTAL: &str = "tradegate_fills_total";
const DECISIONS_TOTAL: &str = "tradegate_risk_decisions_total";
const REALIZED_PNL: &str = "tradegate_realized_pnl";
const TOTAL_REALIZED_PNL: &str = "tradegate_total_realized_pnl";

/// Start the Prometheus scrape endpoint. Must run inside a Tokio runtime.
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter on {}: {}", addr, e))?;

    tracing::info!(%addr, "Metrics exporter listening");
    Ok(())
}

/// Record an applied fill and the resulting PnL
pub fn record_fill(symbol: &str, symbol_pnl: Decimal, total_pnl: Decimal) {
    counter!(FILLS_TOTAL, "symbol" => symbol.to_string()).increment(1);
    gauge!(REALIZED_PNL, "symbol" => symbol.to_string()).set(to_f64(symbol_pnl));
    gauge!(TOTAL_REALIZED_PNL).set(to_f64(total_pnl));
}

/// Record a gate decision
pub fn record_decision(reason: DecisionReason) {
    counter!(DECISIONS_TOTAL, "reason" => reason.label()).increment(1);
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
