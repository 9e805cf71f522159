//! Sources of "now" on a lock axis.

use std::time::{SystemTime, UNIX_EPOCH};

use finpolicy_types::{LockTime, LockUnit, Millis, Timestamp};

use crate::error::CapabilityError;

/// Reads the current position on a lock axis.
///
/// A wall clock implements `TimeSource<Millis>`; a chain-tip query
/// implements `TimeSource<Blocks>`.
pub trait TimeSource<U: LockUnit>: Send + Sync {
    fn current(&self) -> Result<LockTime<U>, CapabilityError>;
}

/// The process wall clock, in epoch milliseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource<Millis> for SystemClock {
    fn current(&self) -> Result<Timestamp, CapabilityError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| CapabilityError::Unavailable(format!("system clock before epoch: {e}")))?;
        let ms = i64::try_from(elapsed.as_millis())
            .map_err(|_| CapabilityError::Unavailable("system clock out of range".into()))?;
        Ok(Timestamp::from_millis(ms))
    }
}

impl<U: LockUnit, T: TimeSource<U> + ?Sized> TimeSource<U> for &T {
    fn current(&self) -> Result<LockTime<U>, CapabilityError> {
        (**self).current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2020() {
        let now = SystemClock.current().unwrap();
        assert!(now.as_millis() > 1_577_836_800_000);
    }
}
