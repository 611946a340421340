//! Static risk limits

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::types::InvalidLimitsError;
use crate::config::RiskConfig;

/// Limits fixed for the lifetime of a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskLimits {
    /// Loss on total realized PnL at which trading stops
    max_daily_loss: Decimal,
    /// Largest order or position notional as a fraction of the reference account
    max_position_fraction: Decimal,
    /// Account size the fraction applies to
    reference_account_size: Decimal,
    notional_limit: Decimal,
}

impl RiskLimits {
    pub fn new(
        max_daily_loss: Decimal,
        max_position_fraction: Decimal,
        reference_account_size: Decimal,
    ) -> Result<Self, InvalidLimitsError> {
        if max_daily_loss <= Decimal::ZERO {
            return Err(InvalidLimitsError::MaxDailyLoss(max_daily_loss));
        }
        if max_position_fraction <= Decimal::ZERO {
            return Err(InvalidLimitsError::MaxPositionFraction(max_position_fraction));
        }
        if reference_account_size <= Decimal::ZERO {
            return Err(InvalidLimitsError::ReferenceAccountSize(reference_account_size));
        }
        let notional_limit = max_position_fraction
            .checked_mul(reference_account_size)
            .ok_or(InvalidLimitsError::NotionalOverflow)?;
        Ok(Self {
            max_daily_loss,
            max_position_fraction,
            reference_account_size,
            notional_limit,
        })
    }

    /// Create from RiskConfig
    pub fn from_config(config: &RiskConfig) -> Result<Self, InvalidLimitsError> {
        Self::new(
            config.max_daily_loss,
            config.max_position_fraction,
            config.reference_account_size,
        )
    }

    pub fn max_daily_loss(&self) -> Decimal {
        self.max_daily_loss
    }

    pub fn max_position_fraction(&self) -> Decimal {
        self.max_position_fraction
    }

    pub fn reference_account_size(&self) -> Decimal {
        self.reference_account_size
    }

    /// Notional ceiling shared by the order-size and position checks
    pub fn notional_limit(&self) -> Decimal {
        self.notional_limit
    }
}

impl Default for RiskLimits {
    fn default() -> Self {
        Self {
            max_daily_loss: dec!(1000),
            max_position_fraction: dec!(0.1),
            reference_account_size: dec!(10000),
            notional_limit: dec!(1000),
        }
    }
}
