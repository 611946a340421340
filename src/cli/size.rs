//! Size command implementation

use clap::Args;
use rust_decimal::Decimal;

use crate::risk::StopLossSizer;

#[derive(Args, Debug)]
pub struct SizeArgs {
    /// Account balance
    #[arg(long)]
    pub balance: Decimal,

    /// Percentage of balance to risk (1 = 1%)
    #[arg(long, default_value = "1")]
    pub risk_pct: Decimal,

    /// Entry price
    #[arg(long)]
    pub entry: Decimal,

    /// Stop price, below entry
    #[arg(long)]
    pub stop: Decimal,
}

impl SizeArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let sizer = StopLossSizer::new(self.risk_pct);
        let size = sizer.calculate(self.balance, self.entry, self.stop);
        if size.is_zero() {
            anyhow::bail!(
                "no position: stop {} must be below entry {} and inputs positive",
                self.stop,
                self.entry
            );
        }

        println!("Risk amount: {}", sizer.risk_amount(self.balance).round_dp(2));
        println!("Quantity:    {}", size.normalize());
        match size.checked_mul(self.entry) {
            Some(notional) => println!("Notional:    {}", notional.round_dp(2)),
            None => println!("Notional:    out of range"),
        }
        Ok(())
    }
}
