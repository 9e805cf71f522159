use finpolicy_capabilities::CapabilityError;
use finpolicy_fees::{FeeDirection, FeeParams, FeeQuoter, LiquidityFeeModel, QuoteError};
use finpolicy_nullables::NullLiquidity;
use finpolicy_types::{ChannelId, Sats};

fn quoter(source: &NullLiquidity) -> FeeQuoter<&NullLiquidity> {
    let params = FeeParams::new(0.25, 0.0025, FeeDirection::DrainRaisesFee).unwrap();
    FeeQuoter::new(LiquidityFeeModel::new(params), source)
}

#[test]
fn quote_reflects_current_reading() {
    let source = NullLiquidity::new();
    source.set("chan-a", 100_000, 25_000);
    let quoter = quoter(&source);

    let quote = quoter.quote(&ChannelId::new("chan-a")).unwrap();
    assert_eq!(quote.rate.value(), 0.1875);
    assert_eq!(quote.max_htlc, Sats::new(6_250));
    assert_eq!(quote.liquidity.capacity, Sats::new(100_000));
}

#[test]
fn every_quote_takes_a_fresh_reading() {
    let source = NullLiquidity::new();
    source.set("chan-a", 100_000, 100_000);
    let quoter = quoter(&source);
    let chan = ChannelId::new("chan-a");

    let full = quoter.quote(&chan).unwrap();
    source.set("chan-a", 100_000, 0);
    let drained = quoter.quote(&chan).unwrap();

    assert_eq!(full.rate.value(), 0.0025);
    assert_eq!(drained.rate.value(), 0.25);
    assert_eq!(source.fetch_count(), 2);
}

#[test]
fn out_of_range_reading_is_policy_error() {
    let source = NullLiquidity::new();
    source.set("broken", 1_000, 2_000);
    let err = quoter(&source).quote(&ChannelId::new("broken")).unwrap_err();
    assert!(matches!(err, QuoteError::Policy(ref e) if e.field() == "liquidity"));

    source.set("empty", 0, 0);
    let err = quoter(&source).quote(&ChannelId::new("empty")).unwrap_err();
    assert!(matches!(err, QuoteError::Policy(ref e) if e.field() == "capacity"));
}

#[test]
fn unknown_channel_is_capability_error() {
    let source = NullLiquidity::new();
    let err = quoter(&source).quote(&ChannelId::new("ghost")).unwrap_err();
    assert!(matches!(err, QuoteError::Capability(CapabilityError::NotFound(_))));
}

#[test]
fn routing_fee_respects_htlc_ceiling() {
    let source = NullLiquidity::new();
    source.set("chan-a", 1_000_000, 400_000);
    let quoter = quoter(&source);
    let chan = ChannelId::new("chan-a");

    // R = 0.4, rate = 0.25 * 0.6 = 0.15
    let fee = quoter
        .routing_fee(&chan, Sats::new(100_000), Sats::new(1_000))
        .unwrap();
    assert_eq!(fee, Sats::new(16_000));

    let err = quoter
        .routing_fee(&chan, Sats::new(100_001), Sats::new(1_000))
        .unwrap_err();
    assert!(matches!(err, QuoteError::Policy(ref e) if e.field() == "amount"));
}

#[test]
fn custom_htlc_fraction() {
    let source = NullLiquidity::new();
    source.set("chan-a", 1_000, 1_000);
    let quoter = quoter(&source).with_htlc_fraction(0.5).unwrap();
    assert_eq!(
        quoter.quote(&ChannelId::new("chan-a")).unwrap().max_htlc,
        Sats::new(500)
    );
    assert!(FeeQuoter::new(LiquidityFeeModel::default(), &source)
        .with_htlc_fraction(0.0)
        .is_err());
}
