//! Configuration types for trade-gate

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::telemetry::LogFormat;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub risk: RiskConfig,
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Risk limit configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RiskConfig {
    /// Realized loss at which every order is rejected
    #[serde(default = "default_max_daily_loss")]
    pub max_daily_loss: Decimal,

    /// Largest order or position notional as a fraction of the reference account
    #[serde(default = "default_max_position_fraction")]
    pub max_position_fraction: Decimal,

    /// Account size the position fraction applies to
    #[serde(default = "default_reference_account_size")]
    pub reference_account_size: Decimal,
}

fn default_max_daily_loss() -> Decimal {
    Decimal::new(1000, 0)
}
fn default_max_position_fraction() -> Decimal {
    Decimal::new(1, 1) // 0.1 = 10%
}
fn default_reference_account_size() -> Decimal {
    Decimal::new(10000, 0)
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            max_daily_loss: default_max_daily_loss(),
            max_position_fraction: default_max_position_fraction(),
            reference_account_size: default_reference_account_size(),
        }
    }
}

/// Tradable pairs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketConfig {
    /// Accepted symbols; empty accepts everything
    #[serde(default)]
    pub supported_symbols: Vec<String>,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Prometheus scrape port; no exporter when unset
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, using defaults only when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
            .map_err(|e| e.context(format!("invalid config file {}", path.display())))
    }
}
