//! Terminal output for ledger and risk reports

use clap::ValueEnum;
use serde::Serialize;

use crate::ledger::LedgerSnapshot;
use crate::market::format_price;
use crate::risk::RiskMetrics;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    ledger: &'a LedgerSnapshot,
    risk: &'a RiskMetrics,
}

/// Print a snapshot with its risk metrics
pub fn print_report(
    snapshot: &LedgerSnapshot,
    metrics: &RiskMetrics,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let report = Report {
                ledger: snapshot,
                risk: metrics,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => print_table(snapshot, metrics),
    }
    Ok(())
}

fn print_table(snapshot: &LedgerSnapshot, metrics: &RiskMetrics) {
    println!("Ledger ({} fills applied)", snapshot.sequence);
    if snapshot.is_empty() {
        println!("  no positions");
    } else {
        println!(
            "  {:<12} {:>18} {:>18} {:>18}",
            "SYMBOL", "POSITION", "REALIZED PNL", "VOLUME"
        );
        for (symbol, summary) in &snapshot.symbols {
            println!(
                "  {:<12} {:>18} {:>18} {:>18}",
                symbol,
                summary.position.normalize(),
                format_price(summary.realized_pnl, symbol),
                format_price(summary.volume, symbol),
            );
        }
    }
    println!();
    println!("Risk");
    println!("  Total realized PnL: {}", metrics.total_realized_pnl.round_dp(2));
    println!("  Max daily loss:     {}", metrics.max_daily_loss);
    println!("  Utilization:        {}%", metrics.risk_utilization_pct);
    println!("  Notional limit:     {}", metrics.notional_limit);
}
