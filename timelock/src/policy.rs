//! Timelock configuration.

use finpolicy_types::{Delay, LockSpan, LockUnit, Millis, PolicyError};
use serde::{Deserialize, Deserializer, Serialize};

/// The execution delay a proposal must wait out after creation.
///
/// Invariant: the delay is never negative. Construction and deserialization
/// both enforce it, so a `TimelockPolicy` in hand is always usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct TimelockPolicy<U: LockUnit> {
    delay: LockSpan<U>,
}

impl<U: LockUnit> TimelockPolicy<U> {
    pub fn new(delay: LockSpan<U>) -> Result<Self, PolicyError> {
        if delay.is_negative() {
            return Err(PolicyError::invalid(
                "delay",
                format!("must be non-negative, got {delay}"),
            ));
        }
        Ok(Self { delay })
    }

    pub fn delay(&self) -> LockSpan<U> {
        self.delay
    }
}

impl TimelockPolicy<Millis> {
    /// 24 hours, the governance execution delay used in production.
    pub const DEFAULT_DELAY: Delay = Delay::DAY;
}

impl Default for TimelockPolicy<Millis> {
    fn default() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
        }
    }
}

impl<'de, U: LockUnit> Deserialize<'de> for TimelockPolicy<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(bound = "")]
        struct Raw<U: LockUnit> {
            delay: LockSpan<U>,
        }

        let raw = Raw::<U>::deserialize(deserializer)?;
        Self::new(raw.delay).map_err(serde::de::Error::custom)
    }
}
