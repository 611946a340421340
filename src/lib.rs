//! trade-gate: pre-trade risk gate and position/PnL ledger
//!
//! This library provides the core components for:
//! - Folding confirmed fills into per-symbol positions and realized PnL
//! - Approving or rejecting orders against loss and notional limits
//! - Serializing evaluate-execute-book through a single ledger owner
//! - Paper execution for dry runs
//! - Stop-distance position sizing
//! - Structured logging and Prometheus metrics

pub mod cli;
pub mod config;
pub mod data;
pub mod desk;
pub mod execution;
pub mod ledger;
pub mod market;
pub mod risk;
pub mod telemetry;
