//! Position and PnL ledger
//!
//! Folds confirmed fills into per-symbol positions and realized PnL

mod book;
mod snapshot;
mod types;

pub use book::{Ledger, ReplayError};
pub use snapshot::{LedgerSnapshot, SymbolSummary};
pub use types::{normalize_symbol, Fill, FillRecord, InvalidFillError, Side, UnknownSide};
