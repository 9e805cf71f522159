//! Unit-tagged lock points and spans.
//!
//! A relative lock is measured in exactly one unit. Wall-clock locks use
//! epoch milliseconds ([`Millis`]); chain locks use block heights
//! ([`Blocks`], BIP 112 style). Points and spans carry their unit as a type
//! parameter, so adding a millisecond delay to a block height does not
//! compile.
//!
//! Values are signed so that upstream readings below zero can be observed
//! and rejected by the gate rather than wrapping silently.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::error::PolicyError;

/// Unit a lock is expressed in.
pub trait LockUnit: Copy + Eq + Hash + Default + Send + Sync + fmt::Debug + 'static {
    /// Short suffix used by `Display`.
    const SUFFIX: &'static str;
}

/// Epoch milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Millis;

impl LockUnit for Millis {
    const SUFFIX: &'static str = "ms";
}

/// Block heights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Blocks;

impl LockUnit for Blocks {
    const SUFFIX: &'static str = " blocks";
}

/// A point on a lock axis (a timestamp or a block height).
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct LockTime<U> {
    value: i64,
    #[serde(skip)]
    _unit: PhantomData<U>,
}

/// A distance on a lock axis (a delay).
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct LockSpan<U> {
    value: i64,
    #[serde(skip)]
    _unit: PhantomData<U>,
}

/// Epoch milliseconds (UTC).
pub type Timestamp = LockTime<Millis>;
/// A wall-clock delay in milliseconds.
pub type Delay = LockSpan<Millis>;
/// A chain height.
pub type BlockHeight = LockTime<Blocks>;
/// A delay counted in blocks.
pub type BlockDelay = LockSpan<Blocks>;

impl<U: LockUnit> LockTime<U> {
    /// The origin of the axis.
    pub const ZERO: Self = Self::new(0);

    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    pub const fn get(&self) -> i64 {
        self.value
    }

    pub fn checked_add(self, span: LockSpan<U>) -> Option<Self> {
        self.value.checked_add(span.value).map(Self::new)
    }

    /// Distance from `self` forward to `later`, saturating at the `i64` bounds.
    pub fn saturating_until(self, later: Self) -> LockSpan<U> {
        LockSpan::new(later.value.saturating_sub(self.value))
    }
}

impl Timestamp {
    pub const fn from_millis(ms: i64) -> Self {
        Self::new(ms)
    }

    pub const fn as_millis(&self) -> i64 {
        self.value
    }
}

impl<U: LockUnit> LockSpan<U> {
    pub const ZERO: Self = Self::new(0);

    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    pub const fn get(&self) -> i64 {
        self.value
    }

    pub const fn is_negative(&self) -> bool {
        self.value < 0
    }
}

impl Delay {
    const MS_PER_SEC: i64 = 1_000;
    const MS_PER_HOUR: i64 = 3_600_000;
    const MS_PER_DAY: i64 = 86_400_000;

    /// One day (86,400,000 ms).
    pub const DAY: Self = Self::new(Self::MS_PER_DAY);

    pub const fn from_millis(ms: i64) -> Self {
        Self::new(ms)
    }

    pub fn from_secs(secs: i64) -> Result<Self, PolicyError> {
        Self::scaled(secs, Self::MS_PER_SEC, "seconds")
    }

    pub fn from_hours(hours: i64) -> Result<Self, PolicyError> {
        Self::scaled(hours, Self::MS_PER_HOUR, "hours")
    }

    pub fn from_days(days: i64) -> Result<Self, PolicyError> {
        Self::scaled(days, Self::MS_PER_DAY, "days")
    }

    pub const fn as_millis(&self) -> i64 {
        self.value
    }

    fn scaled(value: i64, factor: i64, unit: &str) -> Result<Self, PolicyError> {
        value
            .checked_mul(factor)
            .map(Self::new)
            .ok_or_else(|| {
                PolicyError::invalid("delay", format!("{value} {unit} overflows milliseconds"))
            })
    }
}

// Manual impls: derives would require `U` itself to implement each trait.

impl<U> Clone for LockTime<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for LockTime<U> {}

impl<U> PartialEq for LockTime<U> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U> Eq for LockTime<U> {}

impl<U> PartialOrd for LockTime<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U> Ord for LockTime<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<U> Hash for LockTime<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<U: LockUnit> fmt::Debug for LockTime<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LockTime({}{})", self.value, U::SUFFIX)
    }
}

impl<U: LockUnit> fmt::Display for LockTime<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, U::SUFFIX)
    }
}

impl<U> Clone for LockSpan<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for LockSpan<U> {}

impl<U> PartialEq for LockSpan<U> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U> Eq for LockSpan<U> {}

impl<U> PartialOrd for LockSpan<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U> Ord for LockSpan<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<U> Hash for LockSpan<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<U: LockUnit> fmt::Debug for LockSpan<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LockSpan({}{})", self.value, U::SUFFIX)
    }
}

impl<U: LockUnit> fmt::Display for LockSpan<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, U::SUFFIX)
    }
}
