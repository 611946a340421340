//! Fill and side types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Trading side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy base asset
    Buy,
    /// Sell base asset
    Sell,
}

impl Side {
    /// Apply this side's direction to an unsigned quantity
    pub fn signed(self, quantity: Decimal) -> Decimal {
        match self {
            Side::Buy => quantity,
            Side::Sell => -quantity,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side string that is neither BUY nor SELL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown side {0:?}, expected BUY or SELL")]
pub struct UnknownSide(pub String);

impl FromStr for Side {
    type Err = UnknownSide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            _ => Err(UnknownSide(s.to_string())),
        }
    }
}

/// Malformed fill handed to the ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFillError {
    #[error("fill quantity must be positive, got {0}")]
    NonPositiveQuantity(Decimal),
    #[error("fill price must be positive, got {0}")]
    NonPositivePrice(Decimal),
    #[error(transparent)]
    UnknownSide(#[from] UnknownSide),
    #[error("fill symbol is empty")]
    EmptySymbol,
    #[error("fill on {0} overflows decimal range")]
    Overflow(String),
}

/// A confirmed execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    /// Trading pair, upper case
    pub symbol: String,
    pub side: Side,
    pub quantity: Decimal,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl Fill {
    /// Build a fill stamped with the current time
    pub fn new(symbol: impl Into<String>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self {
            symbol: normalize_symbol(&symbol.into()),
            side,
            quantity,
            price,
            timestamp: Utc::now(),
        }
    }

    /// Notional value of the fill
    pub fn notional(&self) -> Result<Decimal, InvalidFillError> {
        self.quantity
            .checked_mul(self.price)
            .ok_or_else(|| InvalidFillError::Overflow(normalize_symbol(&self.symbol)))
    }

    /// Check the fill invariants
    pub fn validate(&self) -> Result<(), InvalidFillError> {
        if self.symbol.trim().is_empty() {
            return Err(InvalidFillError::EmptySymbol);
        }
        if self.quantity <= Decimal::ZERO {
            return Err(InvalidFillError::NonPositiveQuantity(self.quantity));
        }
        if self.price <= Decimal::ZERO {
            return Err(InvalidFillError::NonPositivePrice(self.price));
        }
        self.notional()?;
        Ok(())
    }
}

/// Loosely typed fill as it arrives from a file or an exchange callback
#[derive(Debug, Clone, Deserialize)]
pub struct FillRecord {
    pub symbol: String,
    pub side: String,
    pub quantity: Decimal,
    pub price: Decimal,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl TryFrom<FillRecord> for Fill {
    type Error = InvalidFillError;

    fn try_from(record: FillRecord) -> Result<Self, Self::Error> {
        let fill = Fill {
            symbol: normalize_symbol(&record.symbol),
            side: record.side.parse()?,
            quantity: record.quantity,
            price: record.price,
            timestamp: record.timestamp.unwrap_or_else(Utc::now),
        };
        fill.validate()?;
        Ok(fill)
    }
}

/// Upper-case and trim a trading pair
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(side: &str, quantity: Decimal, price: Decimal) -> FillRecord {
        FillRecord {
            symbol: "btcusdt".to_string(),
            side: side.to_string(),
            quantity,
            price,
            timestamp: None,
        }
    }

    #[test]
    fn test_side_parse() {
        assert_eq!("BUY".parse::<Side>().unwrap(), Side::Buy);
        assert_eq!("sell".parse::<Side>().unwrap(), Side::Sell);
        assert!("HOLD".parse::<Side>().is_err());
    }

    #[test]
    fn test_side_serde_uppercase() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"BUY\"");
        let side: Side = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(side, Side::Sell);
    }

    #[test]
    fn test_side_signed() {
        assert_eq!(Side::Buy.signed(dec!(2)), dec!(2));
        assert_eq!(Side::Sell.signed(dec!(2)), dec!(-2));
    }

    #[test]
    fn test_record_into_fill_normalizes_symbol() {
        let fill = Fill::try_from(record("BUY", dec!(1), dec!(100))).unwrap();
        assert_eq!(fill.symbol, "BTCUSDT");
        assert_eq!(fill.side, Side::Buy);
        assert_eq!(fill.notional(), Ok(dec!(100)));
    }

    #[test]
    fn test_record_unknown_side() {
        let err = Fill::try_from(record("SHORT", dec!(1), dec!(100))).unwrap_err();
        assert!(matches!(err, InvalidFillError::UnknownSide(_)));
    }

    #[test]
    fn test_record_non_positive_values() {
        let err = Fill::try_from(record("BUY", dec!(0), dec!(100))).unwrap_err();
        assert_eq!(err, InvalidFillError::NonPositiveQuantity(dec!(0)));

        let err = Fill::try_from(record("SELL", dec!(1), dec!(-5))).unwrap_err();
        assert_eq!(err, InvalidFillError::NonPositivePrice(dec!(-5)));
    }

    #[test]
    fn test_record_deserialize_without_timestamp() {
        let json = r#"{"symbol":"ETHUSDT","side":"SELL","quantity":"0.5","price":"2000"}"#;
        let record: FillRecord = serde_json::from_str(json).unwrap();
        assert!(record.timestamp.is_none());
        let fill = Fill::try_from(record).unwrap();
        assert_eq!(fill.notional(), Ok(dec!(1000)));
    }

    #[test]
    fn test_notional_overflow_is_invalid() {
        let fill = Fill::new("btcusdt", Side::Buy, Decimal::MAX, dec!(2));
        assert_eq!(fill.notional(), Err(InvalidFillError::Overflow("BTCUSDT".to_string())));
        assert_eq!(fill.validate(), Err(InvalidFillError::Overflow("BTCUSDT".to_string())));
    }

    #[test]
    fn test_blank_symbol_is_empty() {
        let fill = Fill::new("  ", Side::Sell, dec!(1), dec!(100));
        assert_eq!(fill.validate(), Err(InvalidFillError::EmptySymbol));
    }
}
