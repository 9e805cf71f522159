//! Live fee quotes for channels.

use finpolicy_capabilities::{LiquiditySnapshot, LiquiditySource};
use finpolicy_types::{ChannelId, PolicyError, Sats};
use finpolicy_utils::spans::fee_quote_span;
use serde::Serialize;

use crate::error::QuoteError;
use crate::model::{ChannelLiquidity, FeeRate, LiquidityFeeModel};
use crate::routing::{max_htlc_value, routing_fee, validate_htlc_fraction, DEFAULT_HTLC_FRACTION};

/// Fee terms for routing through one channel right now.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeeQuote {
    pub channel: ChannelId,
    pub liquidity: LiquiditySnapshot,
    pub rate: FeeRate,
    pub max_htlc: Sats,
}

/// Joins a [`LiquiditySource`] with a fee model.
///
/// Every quote takes a fresh reading; nothing is cached between calls.
pub struct FeeQuoter<L> {
    model: LiquidityFeeModel,
    source: L,
    htlc_fraction: f64,
}

impl<L: LiquiditySource> FeeQuoter<L> {
    pub fn new(model: LiquidityFeeModel, source: L) -> Self {
        Self {
            model,
            source,
            htlc_fraction: DEFAULT_HTLC_FRACTION,
        }
    }

    pub fn with_htlc_fraction(mut self, fraction: f64) -> Result<Self, PolicyError> {
        validate_htlc_fraction(fraction)?;
        self.htlc_fraction = fraction;
        Ok(self)
    }

    pub fn model(&self) -> &LiquidityFeeModel {
        &self.model
    }

    pub fn quote(&self, channel: &ChannelId) -> Result<FeeQuote, QuoteError> {
        let _span = fee_quote_span(channel.as_str()).entered();
        let liquidity = self.source.fetch_liquidity(channel)?;
        let reading = ChannelLiquidity::from_sats(liquidity.capacity, liquidity.available)
            .inspect_err(|e| {
                tracing::warn!(error = %e, "liquidity reading out of range");
            })?;
        let rate = self.model.fee_rate_for(&reading);
        let max_htlc = max_htlc_value(liquidity.available, self.htlc_fraction)?;

        tracing::debug!(
            capacity = %liquidity.capacity,
            available = %liquidity.available,
            %rate,
            %max_htlc,
            "fee quote"
        );
        Ok(FeeQuote {
            channel: channel.clone(),
            liquidity,
            rate,
            max_htlc,
        })
    }

    /// Absolute fee for forwarding `amount` through `channel`.
    ///
    /// Fails if `amount` exceeds the channel's HTLC ceiling.
    pub fn routing_fee(
        &self,
        channel: &ChannelId,
        amount: Sats,
        base_fee: Sats,
    ) -> Result<Sats, QuoteError> {
        let quote = self.quote(channel)?;
        if amount > quote.max_htlc {
            return Err(PolicyError::invalid(
                "amount",
                format!("{amount} exceeds HTLC ceiling {} on {channel}", quote.max_htlc),
            )
            .into());
        }
        Ok(routing_fee(amount, quote.rate, base_fee)?)
    }
}
