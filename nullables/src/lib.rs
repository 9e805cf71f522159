//! Nullable collaborators for deterministic testing.
//!
//! Every capability the policy core's callers depend on (clock, chain tip,
//! liquidity telemetry, signing, proposal storage) has an in-memory version
//! here that:
//! - returns deterministic values
//! - can be controlled programmatically
//! - never touches the filesystem, network or a real key
//!
//! All of them are `Send + Sync` so tests can share them across threads.

pub mod clock;
pub mod liquidity;
pub mod signer;
pub mod store;

pub use clock::{NullChainTip, NullClock, NullLockSource};
pub use liquidity::NullLiquidity;
pub use signer::NullSigner;
pub use store::NullProposalStore;
