use proptest::prelude::*;

use finpolicy_timelock::{may_execute, Decision, TimelockGate, TimelockPolicy};
use finpolicy_types::{BlockDelay, BlockHeight, Delay, Timestamp};

const MAX: i64 = 1 << 52;

proptest! {
    /// Execution is allowed exactly at creation + delay.
    #[test]
    fn boundary_is_inclusive(created in 0i64..MAX, delay in 0i64..MAX) {
        let decision = may_execute(
            Timestamp::from_millis(created),
            Timestamp::from_millis(created + delay),
            Delay::from_millis(delay),
        ).unwrap();
        prop_assert_eq!(decision, Decision::Allowed);
    }

    /// One unit before the unlock time is blocked with one unit remaining.
    #[test]
    fn one_unit_early_is_blocked(created in 0i64..MAX, delay in 1i64..MAX) {
        let decision = may_execute(
            Timestamp::from_millis(created),
            Timestamp::from_millis(created + delay - 1),
            Delay::from_millis(delay),
        ).unwrap();
        prop_assert_eq!(decision.remaining(), Some(Delay::from_millis(1)));
    }

    /// Once allowed, every later time is allowed as well.
    #[test]
    fn monotonic_in_current_time(
        created in 0i64..MAX,
        delay in 0i64..MAX,
        current in -MAX..(2 * MAX),
        step in 1i64..MAX,
    ) {
        let gate = TimelockGate::new(TimelockPolicy::new(BlockDelay::new(delay)).unwrap());
        let created = BlockHeight::new(created);
        let earlier = gate.may_execute(created, BlockHeight::new(current)).unwrap();
        let later = gate.may_execute(created, BlockHeight::new(current + step)).unwrap();
        if earlier.is_allowed() {
            prop_assert!(later.is_allowed());
        }
    }

    /// Blocked decisions report exactly the distance to the unlock time.
    #[test]
    fn remaining_matches_arithmetic(created in 0i64..MAX, delay in 0i64..MAX, current in -MAX..(2 * MAX)) {
        let decision = may_execute(
            Timestamp::from_millis(created),
            Timestamp::from_millis(current),
            Delay::from_millis(delay),
        ).unwrap();
        let unlock = created + delay;
        match decision {
            Decision::Allowed => prop_assert!(current >= unlock),
            Decision::Blocked { unlock_at, remaining } => {
                prop_assert_eq!(unlock_at.as_millis(), unlock);
                prop_assert_eq!(remaining.as_millis(), unlock - current);
            }
        }
    }

    /// Negative creation times are rejected, never decided.
    #[test]
    fn negative_creation_rejected(created in i64::MIN..0, current in any::<i64>()) {
        let result = may_execute(
            Timestamp::from_millis(created),
            Timestamp::from_millis(current),
            Delay::ZERO,
        );
        prop_assert!(result.is_err());
    }
}
