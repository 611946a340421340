//! Check command implementation

use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::config::Config;
use crate::data;
use crate::desk::TradingDesk;
use crate::execution::{OrderRequest, OrderType};
use crate::ledger::Side;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Trading pair, e.g. BTCUSDT
    #[arg(long)]
    pub symbol: String,

    /// BUY or SELL
    #[arg(long)]
    pub side: String,

    /// Order quantity
    #[arg(long)]
    pub quantity: Decimal,

    /// Limit price, or reference price for market orders
    #[arg(long)]
    pub price: Decimal,

    /// MARKET or LIMIT
    #[arg(long, default_value = "MARKET")]
    pub order_type: String,

    /// Fills to replay before evaluating
    #[arg(long)]
    pub fills: Option<PathBuf>,

    /// Print the decision as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let side: Side = self.side.parse()?;
        let order_type: OrderType = self.order_type.parse()?;
        let order = OrderRequest::new(&self.symbol, side, self.quantity, self.price, order_type);

        let desk = TradingDesk::from_config(config)?;
        if let Some(path) = &self.fills {
            let fills = data::read_fills(path)?;
            desk.apply_fills(&fills).await?;
        }

        let decision = desk.evaluate(&order).await?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&decision)?);
        } else {
            println!(
                "{} {} {} @ {} ({:?}): {}",
                order.side, order.quantity, order.symbol, order.price, order.order_type, decision
            );
            let limits = desk.gate().limits();
            println!(
                "Position {} | PnL {} / loss limit {} | notional limit {}",
                desk.position(&order.symbol),
                desk.total_pnl(),
                limits.max_daily_loss(),
                limits.notional_limit()
            );
        }
        Ok(())
    }
}
