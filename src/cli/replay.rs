//! Replay command implementation

use clap::Args;
use std::path::PathBuf;

use super::report::{print_report, OutputFormat};
use crate::config::Config;
use crate::data;
use crate::desk::TradingDesk;

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// JSON-lines file of confirmed fills
    #[arg(long)]
    pub fills: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ReplayArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let fills = data::read_fills(&self.fills)?;
        tracing::info!(path = ?self.fills, count = fills.len(), "Replaying fills");

        let desk = TradingDesk::from_config(config)?;
        desk.apply_fills(&fills).await?;

        print_report(&desk.snapshot(), &desk.risk_metrics(), self.format)
    }
}
