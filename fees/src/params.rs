//! Fee model configuration.

use finpolicy_types::PolicyError;
use serde::{Deserialize, Deserializer, Serialize};

/// Which way the fee moves with the availability ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeeDirection {
    /// `multiplier * (1 - R)`: draining the channel raises the fee.
    #[default]
    DrainRaisesFee,
    /// `multiplier * R`: spare liquidity raises the fee.
    LiquidityRaisesFee,
}

/// Multiplier, floor, optional ceiling and direction of the fee curve.
///
/// Invariants (checked by [`FeeParams::new`] and on deserialize):
/// `multiplier` finite and > 0, `floor` finite and >= 0, `ceiling` finite
/// and >= `floor` when present.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FeeParams {
    multiplier: f64,
    floor: f64,
    direction: FeeDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    ceiling: Option<f64>,
}

impl FeeParams {
    pub const DEFAULT_MULTIPLIER: f64 = 0.25;
    /// 0.25%.
    pub const DEFAULT_FLOOR: f64 = 0.0025;

    pub fn new(multiplier: f64, floor: f64, direction: FeeDirection) -> Result<Self, PolicyError> {
        Self::validated(multiplier, floor, direction, None)
    }

    /// Cap the rate at `ceiling`.
    pub fn with_ceiling(self, ceiling: f64) -> Result<Self, PolicyError> {
        Self::validated(self.multiplier, self.floor, self.direction, Some(ceiling))
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn direction(&self) -> FeeDirection {
        self.direction
    }

    pub fn ceiling(&self) -> Option<f64> {
        self.ceiling
    }

    /// Apply the curve to an availability ratio already known to be in `[0, 1]`.
    pub(crate) fn rate_for_ratio(&self, ratio: f64) -> f64 {
        let raw = match self.direction {
            FeeDirection::DrainRaisesFee => self.multiplier * (1.0 - ratio),
            FeeDirection::LiquidityRaisesFee => self.multiplier * ratio,
        };
        let rate = raw.max(self.floor);
        match self.ceiling {
            Some(ceiling) => rate.min(ceiling),
            None => rate,
        }
    }

    fn validated(
        multiplier: f64,
        floor: f64,
        direction: FeeDirection,
        ceiling: Option<f64>,
    ) -> Result<Self, PolicyError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(PolicyError::invalid(
                "multiplier",
                format!("must be finite and positive, got {multiplier}"),
            ));
        }
        if !floor.is_finite() || floor < 0.0 {
            return Err(PolicyError::invalid(
                "floor",
                format!("must be finite and non-negative, got {floor}"),
            ));
        }
        if let Some(ceiling) = ceiling {
            if !ceiling.is_finite() || ceiling < floor {
                return Err(PolicyError::invalid(
                    "ceiling",
                    format!("must be finite and at least the floor ({floor}), got {ceiling}"),
                ));
            }
        }
        Ok(Self {
            multiplier,
            floor,
            direction,
            ceiling,
        })
    }
}

impl Default for FeeParams {
    fn default() -> Self {
        Self {
            multiplier: Self::DEFAULT_MULTIPLIER,
            floor: Self::DEFAULT_FLOOR,
            direction: FeeDirection::DrainRaisesFee,
            ceiling: None,
        }
    }
}

impl<'de> Deserialize<'de> for FeeParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default = "default_multiplier")]
            multiplier: f64,
            #[serde(default = "default_floor")]
            floor: f64,
            #[serde(default)]
            direction: FeeDirection,
            #[serde(default)]
            ceiling: Option<f64>,
        }

        fn default_multiplier() -> f64 {
            FeeParams::DEFAULT_MULTIPLIER
        }

        fn default_floor() -> f64 {
            FeeParams::DEFAULT_FLOOR
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::validated(raw.multiplier, raw.floor, raw.direction, raw.ceiling)
            .map_err(serde::de::Error::custom)
    }
}
