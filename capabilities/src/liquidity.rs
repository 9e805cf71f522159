//! Channel liquidity telemetry.

use finpolicy_types::{ChannelId, Sats};
use serde::{Deserialize, Serialize};

use crate::error::CapabilityError;

/// One reading of a channel's capacity and spendable balance.
///
/// Not validated here: an out-of-range reading is a bug upstream and the fee
/// model rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquiditySnapshot {
    pub capacity: Sats,
    pub available: Sats,
}

/// Fetches the current liquidity of a channel from chain or channel state.
pub trait LiquiditySource: Send + Sync {
    fn fetch_liquidity(&self, channel: &ChannelId) -> Result<LiquiditySnapshot, CapabilityError>;
}

impl<T: LiquiditySource + ?Sized> LiquiditySource for &T {
    fn fetch_liquidity(&self, channel: &ChannelId) -> Result<LiquiditySnapshot, CapabilityError> {
        (**self).fetch_liquidity(channel)
    }
}
