//! Paper command implementation

use clap::Args;
use std::path::PathBuf;

use super::report::{print_report, OutputFormat};
use crate::config::Config;
use crate::data;
use crate::desk::{DeskError, SubmitOutcome, TradingDesk};
use crate::execution::{ExecutionEngine, PaperEngine};

#[derive(Args, Debug)]
pub struct PaperArgs {
    /// JSON-lines file of orders to submit in order
    #[arg(long)]
    pub orders: PathBuf,

    /// Fills to replay before the first order
    #[arg(long)]
    pub fills: Option<PathBuf>,

    /// Write the simulated fills to this JSON-lines file
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Output format for the final report
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl PaperArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let orders = data::read_orders(&self.orders)?;
        let desk = TradingDesk::from_config(config)?;
        let engine = PaperEngine::new();

        if let Some(path) = &self.fills {
            let fills = data::read_fills(path)?;
            desk.apply_fills(&fills).await?;
        }

        tracing::info!(count = orders.len(), "Starting paper run");
        let mut executed = 0usize;
        let mut rejected = 0usize;

        for (index, order) in orders.into_iter().enumerate() {
            let label = format!(
                "#{} {} {} {} @ {}",
                index + 1,
                order.side,
                order.quantity,
                order.symbol,
                order.price
            );
            match desk.submit(&engine, order).await {
                Ok(SubmitOutcome::Executed(report)) => {
                    executed += 1;
                    println!("{label}: filled {} ({})", report.filled_quantity(), report.order_id);
                }
                Ok(SubmitOutcome::Rejected(decision)) => {
                    rejected += 1;
                    println!("{label}: {decision}");
                }
                Err(DeskError::InvalidOrder(e)) => {
                    rejected += 1;
                    println!("{label}: invalid order: {e}");
                }
                Err(e) => return Err(e.into()),
            }
        }

        println!();
        println!("{executed} executed, {rejected} rejected");
        println!();

        if let Some(path) = &self.record {
            let fills = engine.get_fills().await?;
            data::write_fills(path, &fills)?;
            tracing::info!(path = ?path, count = fills.len(), "Recorded paper fills");
        }

        print_report(&desk.snapshot(), &desk.risk_metrics(), self.format)
    }
}
