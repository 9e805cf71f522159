//! Nullable liquidity telemetry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use finpolicy_capabilities::{CapabilityError, LiquiditySnapshot, LiquiditySource};
use finpolicy_types::{ChannelId, Sats};

/// In-memory channel balances. Readings are whatever the test last set.
#[derive(Default)]
pub struct NullLiquidity {
    channels: Mutex<HashMap<ChannelId, LiquiditySnapshot>>,
    fetches: AtomicUsize,
}

impl NullLiquidity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the reading for a channel.
    pub fn set(&self, channel: impl Into<ChannelId>, capacity: u64, available: u64) {
        self.channels.lock().unwrap().insert(
            channel.into(),
            LiquiditySnapshot {
                capacity: Sats::new(capacity),
                available: Sats::new(available),
            },
        );
    }

    /// Number of `fetch_liquidity` calls served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl LiquiditySource for NullLiquidity {
    fn fetch_liquidity(&self, channel: &ChannelId) -> Result<LiquiditySnapshot, CapabilityError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.channels
            .lock()
            .unwrap()
            .get(channel)
            .copied()
            .ok_or_else(|| CapabilityError::NotFound(format!("channel {channel}")))
    }
}
