use proptest::prelude::*;

use finpolicy_fees::{fee_rate, FeeDirection, FeeParams};

fn drain_params() -> impl Strategy<Value = FeeParams> {
    (0.0001f64..10.0, 0.0f64..1.0)
        .prop_map(|(m, f)| FeeParams::new(m, f, FeeDirection::DrainRaisesFee).unwrap())
}

fn any_params() -> impl Strategy<Value = FeeParams> {
    (
        0.0001f64..10.0,
        0.0f64..1.0,
        prop_oneof![
            Just(FeeDirection::DrainRaisesFee),
            Just(FeeDirection::LiquidityRaisesFee)
        ],
    )
        .prop_map(|(m, f, d)| FeeParams::new(m, f, d).unwrap())
}

proptest! {
    /// A full channel pays only the floor under drainRaisesFee.
    #[test]
    fn full_channel_pays_floor(capacity in 1.0f64..1e12, params in drain_params()) {
        let rate = fee_rate(capacity, capacity, &params).unwrap();
        prop_assert_eq!(rate.value(), params.floor().max(0.0));
    }

    /// An empty channel pays the multiplier (or the floor, if higher).
    #[test]
    fn empty_channel_pays_multiplier(capacity in 1.0f64..1e12, params in drain_params()) {
        let rate = fee_rate(capacity, 0.0, &params).unwrap();
        prop_assert_eq!(rate.value(), params.floor().max(params.multiplier()));
    }

    /// Under drainRaisesFee the rate never rises as liquidity grows.
    #[test]
    fn non_increasing_in_liquidity(
        capacity in 1.0f64..1e12,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
        params in drain_params(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rate_lo = fee_rate(capacity, capacity * lo, &params).unwrap();
        let rate_hi = fee_rate(capacity, capacity * hi, &params).unwrap();
        prop_assert!(rate_hi.value() <= rate_lo.value());
    }

    /// Every accepted input yields a finite rate no lower than the floor.
    #[test]
    fn rate_is_finite_and_above_floor(
        capacity in 1e-9f64..1e15,
        share in 0.0f64..=1.0,
        params in any_params(),
    ) {
        let rate = fee_rate(capacity, capacity * share, &params).unwrap();
        prop_assert!(rate.value().is_finite());
        prop_assert!(rate.value() >= params.floor());
    }

    /// Liquidity below zero is rejected.
    #[test]
    fn negative_liquidity_rejected(capacity in 1.0f64..1e12, deficit in 1e-6f64..1e6) {
        prop_assert!(fee_rate(capacity, -deficit, &FeeParams::default()).is_err());
    }

    /// Liquidity above capacity is rejected.
    #[test]
    fn excess_liquidity_rejected(capacity in 1.0f64..1e12, excess in 1.0f64..1e6) {
        prop_assert!(fee_rate(capacity, capacity + excess, &FeeParams::default()).is_err());
    }

    /// Non-positive capacity is rejected.
    #[test]
    fn non_positive_capacity_rejected(capacity in -1e12f64..=0.0) {
        prop_assert!(fee_rate(capacity, 0.0, &FeeParams::default()).is_err());
    }
}
