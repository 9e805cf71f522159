#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use finpolicy_fees::{fee_rate, FeeDirection, FeeParams};

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: f64,
    liquidity: f64,
    multiplier: f64,
    floor: f64,
    ceiling: Option<f64>,
    drain: bool,
}

fuzz_target!(|input: Input| {
    let direction = if input.drain {
        FeeDirection::DrainRaisesFee
    } else {
        FeeDirection::LiquidityRaisesFee
    };
    let Ok(mut params) = FeeParams::new(input.multiplier, input.floor, direction) else {
        return;
    };
    if let Some(ceiling) = input.ceiling {
        let Ok(capped) = params.with_ceiling(ceiling) else {
            return;
        };
        params = capped;
    }

    // Any accepted input must produce a finite rate within [floor, ceiling].
    if let Ok(rate) = fee_rate(input.capacity, input.liquidity, &params) {
        assert!(rate.value().is_finite());
        assert!(rate.value() >= params.floor());
        if let Some(ceiling) = params.ceiling() {
            assert!(rate.value() <= ceiling);
        }
    }
});
