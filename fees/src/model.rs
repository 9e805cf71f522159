//! The fee-rate calculation.

use std::fmt;

use finpolicy_types::{PolicyError, Sats};
use serde::Serialize;

use crate::params::FeeParams;

/// A fee rate. Always finite and non-negative.
///
/// Computed fresh for every routing decision; liquidity moves with each payment.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct FeeRate(f64);

impl FeeRate {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated liquidity reading: `capacity > 0` and `0 <= available <= capacity`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelLiquidity {
    capacity: f64,
    available: f64,
}

impl ChannelLiquidity {
    pub fn new(capacity: f64, available: f64) -> Result<Self, PolicyError> {
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(PolicyError::invalid(
                "capacity",
                format!("must be finite and positive, got {capacity}"),
            ));
        }
        if !available.is_finite() || available < 0.0 || available > capacity {
            return Err(PolicyError::invalid(
                "liquidity",
                format!("must lie in [0, {capacity}], got {available}"),
            ));
        }
        Ok(Self {
            capacity,
            available,
        })
    }

    pub fn from_sats(capacity: Sats, available: Sats) -> Result<Self, PolicyError> {
        Self::new(capacity.as_f64(), available.as_f64())
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn available(&self) -> f64 {
        self.available
    }

    /// Availability ratio `available / capacity`, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        self.available / self.capacity
    }
}

/// Fee rate for a channel with the given `capacity` and available `liquidity`.
///
/// Zero or negative capacity is rejected (never a division by zero), as is
/// liquidity outside `[0, capacity]`. Out-of-range readings are not clamped.
pub fn fee_rate(capacity: f64, liquidity: f64, params: &FeeParams) -> Result<FeeRate, PolicyError> {
    let channel = ChannelLiquidity::new(capacity, liquidity)?;
    Ok(rate_for(&channel, params))
}

fn rate_for(channel: &ChannelLiquidity, params: &FeeParams) -> FeeRate {
    FeeRate(params.rate_for_ratio(channel.ratio()))
}

/// A fee model bound to one parameter set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LiquidityFeeModel {
    params: FeeParams,
}

impl LiquidityFeeModel {
    pub fn new(params: FeeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &FeeParams {
        &self.params
    }

    pub fn fee_rate(&self, capacity: f64, liquidity: f64) -> Result<FeeRate, PolicyError> {
        fee_rate(capacity, liquidity, &self.params).inspect_err(|e| {
            tracing::debug!(capacity, liquidity, error = %e, "fee rate rejected");
        })
    }

    pub fn fee_rate_for(&self, channel: &ChannelLiquidity) -> FeeRate {
        rate_for(channel, &self.params)
    }
}
