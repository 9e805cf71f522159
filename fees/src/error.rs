use finpolicy_capabilities::CapabilityError;
use finpolicy_types::PolicyError;
use thiserror::Error;

/// Failure while quoting a fee for a live channel.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("liquidity source: {0}")]
    Capability(#[from] CapabilityError),
}
