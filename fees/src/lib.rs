//! Liquidity-scaled fee rates for payment channels.
//!
//! The rate depends on the availability ratio `R = liquidity / capacity`.
//! Under [`FeeDirection::DrainRaisesFee`] the fee climbs as a channel is
//! drained, which makes liquidity-exhausting (jamming) payments expensive.
//! Multiplier, floor, optional ceiling and direction are all configuration.

pub mod error;
pub mod model;
pub mod params;
pub mod quoter;
pub mod routing;

pub use error::QuoteError;
pub use model::{fee_rate, ChannelLiquidity, FeeRate, LiquidityFeeModel};
pub use params::{FeeDirection, FeeParams};
pub use quoter::{FeeQuote, FeeQuoter};
pub use routing::{max_htlc_value, routing_fee, DEFAULT_HTLC_FRACTION};
