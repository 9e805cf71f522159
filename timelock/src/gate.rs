//! The execution gate.

use finpolicy_types::{LockSpan, LockTime, LockUnit, Millis, PolicyError};

use crate::policy::TimelockPolicy;

/// Outcome of a timelock check.
///
/// `Blocked` is a normal result: the caller defers and asks again later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision<U: LockUnit> {
    Allowed,
    Blocked {
        /// First instant at which execution is allowed.
        unlock_at: LockTime<U>,
        /// `unlock_at - current`, always positive.
        remaining: LockSpan<U>,
    },
}

impl<U: LockUnit> Decision<U> {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub fn remaining(&self) -> Option<LockSpan<U>> {
        match self {
            Self::Allowed => None,
            Self::Blocked { remaining, .. } => Some(*remaining),
        }
    }
}

/// Decide whether a proposal created at `creation` may execute at `current`.
///
/// Allowed iff `current >= creation + delay` (the boundary is inclusive).
/// `current` may lie before `creation`; that is simply not yet due.
pub fn may_execute<U: LockUnit>(
    creation: LockTime<U>,
    current: LockTime<U>,
    delay: LockSpan<U>,
) -> Result<Decision<U>, PolicyError> {
    let unlock_at = unlock_time(creation, delay)?;

    if current >= unlock_at {
        return Ok(Decision::Allowed);
    }

    let remaining = current.saturating_until(unlock_at);
    tracing::trace!(%creation, %current, %unlock_at, %remaining, "timelock blocked");
    Ok(Decision::Blocked {
        unlock_at,
        remaining,
    })
}

fn unlock_time<U: LockUnit>(
    creation: LockTime<U>,
    delay: LockSpan<U>,
) -> Result<LockTime<U>, PolicyError> {
    if creation.get() < 0 {
        return Err(PolicyError::invalid(
            "creation_time",
            format!("must be non-negative, got {creation}"),
        ));
    }
    if delay.is_negative() {
        return Err(PolicyError::invalid(
            "delay",
            format!("must be non-negative, got {delay}"),
        ));
    }
    creation.checked_add(delay).ok_or_else(|| {
        PolicyError::invalid("delay", format!("{creation} + {delay} overflows"))
    })
}

/// A timelock bound to one configured policy.
///
/// Holds no clock and no per-proposal state; share it freely across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelockGate<U: LockUnit> {
    policy: TimelockPolicy<U>,
}

impl<U: LockUnit> TimelockGate<U> {
    pub fn new(policy: TimelockPolicy<U>) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &TimelockPolicy<U> {
        &self.policy
    }

    pub fn may_execute(
        &self,
        creation: LockTime<U>,
        current: LockTime<U>,
    ) -> Result<Decision<U>, PolicyError> {
        may_execute(creation, current, self.policy.delay())
    }

    pub fn unlock_time(&self, creation: LockTime<U>) -> Result<LockTime<U>, PolicyError> {
        unlock_time(creation, self.policy.delay())
    }
}

impl Default for TimelockGate<Millis> {
    fn default() -> Self {
        Self::new(TimelockPolicy::default())
    }
}

impl<U: LockUnit> From<TimelockPolicy<U>> for TimelockGate<U> {
    fn from(policy: TimelockPolicy<U>) -> Self {
        Self::new(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finpolicy_types::{BlockDelay, BlockHeight, Delay, Timestamp};

    const CREATED: Timestamp = Timestamp::from_millis(1_000_000);
    const TWO_DAYS: Delay = Delay::from_millis(172_800_000);

    #[test]
    fn allowed_exactly_at_unlock() {
        let now = Timestamp::from_millis(1_000_000 + 172_800_000);
        assert_eq!(may_execute(CREATED, now, TWO_DAYS).unwrap(), Decision::Allowed);
    }

    #[test]
    fn blocked_one_unit_before_unlock() {
        let now = Timestamp::from_millis(1_000_000 + 172_800_000 - 1);
        let decision = may_execute(CREATED, now, TWO_DAYS).unwrap();
        assert_eq!(
            decision,
            Decision::Blocked {
                unlock_at: Timestamp::from_millis(173_800_000),
                remaining: Delay::from_millis(1),
            }
        );
        assert_eq!(decision.remaining(), Some(Delay::from_millis(1)));
    }

    #[test]
    fn current_before_creation_is_blocked() {
        let now = Timestamp::from_millis(0);
        let decision = may_execute(CREATED, now, TWO_DAYS).unwrap();
        assert_eq!(decision.remaining(), Some(Delay::from_millis(173_800_000)));
    }

    #[test]
    fn negative_current_time_is_accepted() {
        let now = Timestamp::from_millis(-50);
        let decision = may_execute(Timestamp::ZERO, now, Delay::ZERO).unwrap();
        assert_eq!(decision.remaining(), Some(Delay::from_millis(50)));
    }

    #[test]
    fn zero_delay_allows_at_creation() {
        assert!(may_execute(CREATED, CREATED, Delay::ZERO).unwrap().is_allowed());
    }

    #[test]
    fn negative_creation_time_is_invalid_input() {
        let err = may_execute(Timestamp::from_millis(-1), CREATED, TWO_DAYS).unwrap_err();
        assert_eq!(err.field(), "creation_time");
    }

    #[test]
    fn negative_delay_is_invalid_input() {
        let err = may_execute(CREATED, CREATED, Delay::from_millis(-1)).unwrap_err();
        assert_eq!(err.field(), "delay");
    }

    #[test]
    fn unlock_overflow_is_invalid_input() {
        let err = may_execute(Timestamp::from_millis(i64::MAX), CREATED, Delay::from_millis(1))
            .unwrap_err();
        assert_eq!(err.field(), "delay");
    }

    #[test]
    fn remaining_saturates_for_extreme_current_time() {
        let decision = may_execute(
            Timestamp::from_millis(i64::MAX - 1),
            Timestamp::from_millis(i64::MIN),
            Delay::ZERO,
        )
        .unwrap();
        assert_eq!(decision.remaining(), Some(Delay::from_millis(i64::MAX)));
    }

    #[test]
    fn gate_uses_configured_delay() {
        let gate = TimelockGate::new(TimelockPolicy::new(TWO_DAYS).unwrap());
        assert_eq!(
            gate.unlock_time(CREATED).unwrap(),
            Timestamp::from_millis(173_800_000)
        );
        assert!(!gate.may_execute(CREATED, CREATED).unwrap().is_allowed());
    }

    #[test]
    fn block_height_gate() {
        let gate = TimelockGate::from(TimelockPolicy::new(BlockDelay::new(144)).unwrap());
        let created = BlockHeight::new(840_000);
        assert!(gate.may_execute(created, BlockHeight::new(840_144)).unwrap().is_allowed());
        assert_eq!(
            gate.may_execute(created, BlockHeight::new(840_100)).unwrap().remaining(),
            Some(BlockDelay::new(44))
        );
    }
}
