//! Nullable time sources: a wall clock and a chain tip that only move when told.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicI64, Ordering};

use finpolicy_capabilities::{CapabilityError, TimeSource};
use finpolicy_types::{Blocks, LockSpan, LockTime, LockUnit, Millis};

/// A deterministic position on a lock axis.
pub struct NullLockSource<U> {
    current: AtomicI64,
    _unit: PhantomData<fn() -> U>,
}

/// Deterministic wall clock in epoch milliseconds.
pub type NullClock = NullLockSource<Millis>;
/// Deterministic chain tip.
pub type NullChainTip = NullLockSource<Blocks>;

impl<U: LockUnit> NullLockSource<U> {
    pub fn new(initial: i64) -> Self {
        Self {
            current: AtomicI64::new(initial),
            _unit: PhantomData,
        }
    }

    /// Get the current position.
    pub fn now(&self) -> LockTime<U> {
        LockTime::new(self.current.load(Ordering::SeqCst))
    }

    /// Move forward by `span`.
    pub fn advance(&self, span: LockSpan<U>) {
        self.current.fetch_add(span.get(), Ordering::SeqCst);
    }

    /// Jump to a specific position.
    pub fn set(&self, value: i64) {
        self.current.store(value, Ordering::SeqCst);
    }
}

impl<U: LockUnit> TimeSource<U> for NullLockSource<U> {
    fn current(&self) -> Result<LockTime<U>, CapabilityError> {
        Ok(self.now())
    }
}
