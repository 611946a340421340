//! Market module
//!
//! Supported trading pairs and price display

mod symbols;

pub use symbols::{format_price, SymbolUniverse};
