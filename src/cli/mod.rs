//! CLI interface for trade-gate
//!
//! Provides subcommands for:
//! - `replay`: Fold a fill file into the ledger and report
//! - `check`: Run one order through the risk gate
//! - `paper`: Route an order file through the desk with paper execution
//! - `size`: Stop-distance position sizing
//! - `config`: Show the effective configuration

mod check;
mod paper;
mod replay;
mod report;
mod size;

pub use check::CheckArgs;
pub use paper::PaperArgs;
pub use replay::ReplayArgs;
pub use report::OutputFormat;
pub use size::SizeArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "trade-gate")]
#[command(about = "Pre-trade risk gate and position/PnL ledger")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay fills and print positions, PnL, and risk usage
    Replay(ReplayArgs),
    /// Evaluate a single order against the risk gate
    Check(CheckArgs),
    /// Run orders through the desk with simulated fills
    Paper(PaperArgs),
    /// Size a position from a stop distance
    Size(SizeArgs),
    /// Show configuration
    Config,
}
