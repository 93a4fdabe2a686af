//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct: logging, the optional paper back
//! office, and the list of triggers to run.
//!
//! # Example
//!
//! ```
//! use pricebot::infrastructure::config::settings::Config;
//!
//! let config = Config::parse_toml(r#"
//! [[triggers]]
//! instrument = "FB"
//! quantity = 100
//! threshold = "200.0"
//! "#).unwrap();
//!
//! assert_eq!(config.triggers.len(), 1);
//! assert!(!config.back_office.enabled);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::domain::{InstrumentId, Price, Quantity};
use crate::error::{ConfigError, Result};

/// One trigger to run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TriggerConfig {
    pub instrument: InstrumentId,
    /// Shares to buy per qualifying tick. Not validated.
    pub quantity: Quantity,
    /// Ticks strictly below this price qualify. Prefer a quoted string
    /// (`"199.9"`) to keep the value exact.
    pub threshold: Price,
}

/// Paper back office settings.
///
/// When disabled, triggers run without a back office and report every
/// qualifying tick as an unconfigured failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackOfficeConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Shares available per instrument.
    #[serde(default)]
    pub inventory: BTreeMap<InstrumentId, Quantity>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub back_office: BackOfficeConfig,
    #[serde(default)]
    pub triggers: Vec<TriggerConfig>,
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    fn validate(&self) -> Result<()> {
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }

        if self.triggers.is_empty() {
            return Err(ConfigError::MissingField { field: "triggers" }.into());
        }

        for trigger in &self.triggers {
            if trigger.instrument.is_empty() {
                return Err(ConfigError::MissingField { field: "instrument" }.into());
            }
            if trigger.threshold < Decimal::ZERO {
                return Err(ConfigError::InvalidValue {
                    field: "threshold",
                    reason: format!(
                        "threshold for {} must not be negative, got {}",
                        trigger.instrument, trigger.threshold
                    ),
                }
                .into());
            }
        }

        Ok(())
    }
}
