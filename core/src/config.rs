//! Policy configuration with TOML file support.
//!
//! Configuration is an in-process value; the TOML loader is a convenience for
//! callers that keep their policy constants in a file. Every field has a
//! default, so an empty document is a valid configuration.

use std::path::Path;

use finpolicy_fees::{FeeDirection, FeeParams};
use finpolicy_timelock::TimelockPolicy;
use finpolicy_types::{Delay, Millis, PolicyError};
use finpolicy_utils::LogFormat;
use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub timelock: TimelockSection,

    #[serde(default)]
    pub fees: FeeSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelockSection {
    /// Execution delay in milliseconds. Timestamps are epoch milliseconds too.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeeSection {
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,

    #[serde(default = "default_floor")]
    pub floor: f64,

    /// `"drainRaisesFee"` or `"liquidityRaisesFee"`.
    #[serde(default)]
    pub direction: FeeDirection,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Log format: "human" or "json".
    #[serde(default)]
    pub format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_delay_ms() -> i64 {
    TimelockPolicy::<Millis>::DEFAULT_DELAY.as_millis()
}

fn default_multiplier() -> f64 {
    FeeParams::DEFAULT_MULTIPLIER
}

fn default_floor() -> f64 {
    FeeParams::DEFAULT_FLOOR
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TimelockSection {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl Default for FeeSection {
    fn default() -> Self {
        Self {
            multiplier: default_multiplier(),
            floor: default_floor(),
            direction: FeeDirection::default(),
            ceiling: None,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: default_log_level(),
        }
    }
}

// ── Impl ───────────────────────────────────────────────────────────────

impl PolicyConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CoreError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, CoreError> {
        toml::from_str(s).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, CoreError> {
        toml::to_string_pretty(self).map_err(|e| CoreError::Config(e.to_string()))
    }

    pub fn timelock_policy(&self) -> Result<TimelockPolicy<Millis>, PolicyError> {
        TimelockPolicy::new(Delay::from_millis(self.timelock.delay_ms))
    }

    pub fn fee_params(&self) -> Result<FeeParams, PolicyError> {
        let fees = &self.fees;
        let params = FeeParams::new(fees.multiplier, fees.floor, fees.direction)?;
        match fees.ceiling {
            Some(ceiling) => params.with_ceiling(ceiling),
            None => Ok(params),
        }
    }
}
