#![no_main]

use libfuzzer_sys::fuzz_target;

use finpolicy_timelock::{may_execute, Decision};
use finpolicy_types::{Delay, Timestamp};

fuzz_target!(|input: (i64, i64, i64)| {
    let (creation, current, delay) = input;
    let creation = Timestamp::from_millis(creation);
    let current = Timestamp::from_millis(current);

    // Never panics; blocked decisions always carry a positive wait.
    match may_execute(creation, current, Delay::from_millis(delay)) {
        Ok(Decision::Blocked { remaining, unlock_at }) => {
            assert!(remaining.as_millis() > 0);
            assert!(current < unlock_at);
        }
        Ok(Decision::Allowed) | Err(_) => {}
    }
});
