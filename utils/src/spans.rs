//! Pre-built [`tracing::Span`] constructors for policy operations.
//!
//! Consistent span names make it easy to correlate a decision with the
//! caller action that requested it.

use tracing::{debug_span, info_span, Span};

/// Span covering one executor action on a proposal.
pub fn proposal_span(action: &str, proposal: &str) -> Span {
    info_span!("proposal", action = %action, id = %proposal)
}

/// Span covering a single timelock check.
pub fn timelock_span(creation: i64, current: i64) -> Span {
    debug_span!("timelock", creation, current)
}

/// Span covering a single fee-rate computation.
pub fn fee_rate_span(capacity: f64, liquidity: f64) -> Span {
    debug_span!("fee_rate", capacity, liquidity)
}

/// Span covering a live fee quote for one channel.
pub fn fee_quote_span(channel: &str) -> Span {
    info_span!("fee_quote", channel = %channel)
}
