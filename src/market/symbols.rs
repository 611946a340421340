//! Trading pair universe

use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::config::MarketConfig;
use crate::ledger::normalize_symbol;
use crate::risk::InvalidOrderError;

/// Set of tradable pairs. Empty means every pair is accepted.
#[derive(Debug, Clone, Default)]
pub struct SymbolUniverse {
    symbols: HashSet<String>,
}

impl SymbolUniverse {
    /// Universe that accepts any symbol
    pub fn any() -> Self {
        Self::default()
    }

    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            symbols: symbols
                .into_iter()
                .map(|s| normalize_symbol(s.as_ref()))
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Create from MarketConfig
    pub fn from_config(config: &MarketConfig) -> Self {
        Self::new(&config.supported_symbols)
    }

    pub fn is_restricted(&self) -> bool {
        !self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        !self.is_restricted() || self.symbols.contains(&normalize_symbol(symbol))
    }

    /// Reject symbols outside the universe
    pub fn check(&self, symbol: &str) -> Result<(), InvalidOrderError> {
        if self.contains(symbol) {
            Ok(())
        } else {
            Err(InvalidOrderError::UnsupportedSymbol(normalize_symbol(symbol)))
        }
    }
}

/// Format a price for display: 2 places for USDT pairs, 8 otherwise
pub fn format_price(price: Decimal, symbol: &str) -> String {
    if symbol.to_ascii_uppercase().contains("USDT") {
        format!("{:.2}", price.round_dp(2))
    } else {
        format!("{:.8}", price.round_dp(8))
    }
}
