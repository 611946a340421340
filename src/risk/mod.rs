//! Risk management module
//!
//! Pre-trade limits, decisions, and position sizing

mod gate;
mod limits;
mod report;
mod sizing;
mod types;

pub use gate::RiskGate;
pub use limits::RiskLimits;
pub use report::RiskMetrics;
pub use sizing::StopLossSizer;
pub use types::{DecisionReason, InvalidLimitsError, InvalidOrderError, RiskDecision};
