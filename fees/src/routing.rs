//! Absolute fees and HTLC sizing derived from a fee rate.

use finpolicy_types::{PolicyError, Sats};

use crate::model::FeeRate;

/// Largest share of outbound liquidity a single HTLC may claim.
pub const DEFAULT_HTLC_FRACTION: f64 = 0.25;

/// `base_fee + floor(amount * rate)`.
pub fn routing_fee(amount: Sats, rate: FeeRate, base_fee: Sats) -> Result<Sats, PolicyError> {
    let proportional = (amount.as_f64() * rate.value()).floor();
    // u64::MAX as f64 rounds up to 2^64, so `>=` catches every overflow.
    if proportional >= u64::MAX as f64 {
        return Err(PolicyError::invalid(
            "amount",
            format!("proportional fee for {amount} at rate {rate} overflows"),
        ));
    }
    base_fee
        .checked_add(Sats::new(proportional as u64))
        .ok_or_else(|| PolicyError::invalid("base_fee", format!("{base_fee} overflows routing fee")))
}

/// Cap a single HTLC at `fraction` of the available outbound liquidity.
pub fn max_htlc_value(available: Sats, fraction: f64) -> Result<Sats, PolicyError> {
    validate_htlc_fraction(fraction)?;
    Ok(Sats::new((available.as_f64() * fraction).floor() as u64))
}

pub(crate) fn validate_htlc_fraction(fraction: f64) -> Result<(), PolicyError> {
    if fraction.is_finite() && fraction > 0.0 && fraction <= 1.0 {
        Ok(())
    } else {
        Err(PolicyError::invalid(
            "htlc_fraction",
            format!("must lie in (0, 1], got {fraction}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fee_rate;
    use crate::params::FeeParams;

    fn rate(value_at_empty_channel: f64) -> FeeRate {
        let params = FeeParams::new(
            value_at_empty_channel,
            0.0,
            crate::params::FeeDirection::DrainRaisesFee,
        )
        .unwrap();
        fee_rate(1.0, 0.0, &params).unwrap()
    }

    #[test]
    fn base_plus_proportional() {
        let fee = routing_fee(Sats::new(100_000), rate(0.001), Sats::new(1_000)).unwrap();
        assert_eq!(fee, Sats::new(1_100));
    }

    #[test]
    fn proportional_part_rounds_down() {
        let fee = routing_fee(Sats::new(999), rate(0.001), Sats::ZERO).unwrap();
        assert_eq!(fee, Sats::ZERO);
    }

    #[test]
    fn overflow_is_invalid_input() {
        let err = routing_fee(Sats::new(u64::MAX), rate(2.0), Sats::ZERO).unwrap_err();
        assert_eq!(err.field(), "amount");

        let err = routing_fee(Sats::new(10), rate(0.5), Sats::new(u64::MAX)).unwrap_err();
        assert_eq!(err.field(), "base_fee");
    }

    #[test]
    fn htlc_limit_is_quarter_of_outbound() {
        let max = max_htlc_value(Sats::new(1_000_001), DEFAULT_HTLC_FRACTION).unwrap();
        assert_eq!(max, Sats::new(250_000));
    }

    #[test]
    fn htlc_fraction_validated() {
        for f in [0.0, -0.5, 1.5, f64::NAN] {
            assert_eq!(
                max_htlc_value(Sats::new(10), f).unwrap_err().field(),
                "htlc_fraction"
            );
        }
        assert_eq!(max_htlc_value(Sats::new(10), 1.0).unwrap(), Sats::new(10));
    }
}
