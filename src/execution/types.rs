//! Execution types

use crate::ledger::{normalize_symbol, Fill, Side};
use crate::risk::InvalidOrderError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Order identifier
pub type OrderId = Uuid;

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Market order (immediate execution)
    #[default]
    Market,
    /// Limit order (price specified)
    Limit,
}

impl FromStr for OrderType {
    type Err = InvalidOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MARKET" => Ok(OrderType::Market),
            "LIMIT" => Ok(OrderType::Limit),
            _ => Err(InvalidOrderError::UnknownOrderType(s.to_string())),
        }
    }
}

/// An order proposed for submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Trading pair, upper case
    pub symbol: String,
    pub side: Side,
    pub quantity: Decimal,
    /// Limit price, or the caller's reference price for market orders
    pub price: Decimal,
    #[serde(default)]
    pub order_type: OrderType,
}

impl OrderRequest {
    pub fn new(
        symbol: impl Into<String>,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        order_type: OrderType,
    ) -> Self {
        Self {
            symbol: normalize_symbol(&symbol.into()),
            side,
            quantity,
            price,
            order_type,
        }
    }

    /// Market order at a reference price
    pub fn market(symbol: impl Into<String>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self::new(symbol, side, quantity, price, OrderType::Market)
    }

    /// Limit order
    pub fn limit(symbol: impl Into<String>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self::new(symbol, side, quantity, price, OrderType::Limit)
    }

    pub fn notional(&self) -> Result<Decimal, InvalidOrderError> {
        self.quantity
            .checked_mul(self.price)
            .ok_or_else(|| InvalidOrderError::Overflow(normalize_symbol(&self.symbol)))
    }

    /// Check the order invariants
    pub fn validate(&self) -> Result<(), InvalidOrderError> {
        if self.symbol.trim().is_empty() {
            return Err(InvalidOrderError::EmptySymbol);
        }
        if self.quantity <= Decimal::ZERO {
            return Err(InvalidOrderError::NonPositiveQuantity(self.quantity));
        }
        if self.price <= Decimal::ZERO {
            return Err(InvalidOrderError::NonPositivePrice(self.price));
        }
        self.notional()?;
        Ok(())
    }
}

/// Loosely typed order as it arrives from a file or a request body
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    pub symbol: String,
    pub side: String,
    #[serde(default, rename = "type")]
    pub order_type: Option<String>,
    pub quantity: Decimal,
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl TryFrom<OrderRecord> for OrderRequest {
    type Error = InvalidOrderError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let order_type = match record.order_type.as_deref() {
            Some(raw) => raw.parse()?,
            None => OrderType::Market,
        };
        let price = record.price.ok_or(InvalidOrderError::MissingPrice)?;
        let order = OrderRequest::new(
            record.symbol,
            record.side.parse()?,
            record.quantity,
            price,
            order_type,
        );
        order.validate()?;
        Ok(order)
    }
}

/// Result of a submitted order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub order_id: OrderId,
    /// Fills confirmed for this order, possibly empty
    pub fills: Vec<Fill>,
}

impl ExecutionReport {
    pub fn filled_quantity(&self) -> Decimal {
        self.fills
            .iter()
            .fold(Decimal::ZERO, |acc, f| acc.saturating_add(f.quantity))
    }
}
