//! Capability interfaces for the systems that surround the policy core.
//!
//! The pure gate and fee model only ever see the *values* these return. The
//! governance executor and the fee quoter are the callers that hold
//! capabilities and turn readings into policy inputs.
//!
//! Swap these for the in-memory versions in `finpolicy-nullables` in tests.

pub mod error;
pub mod liquidity;
pub mod signer;
pub mod time;

pub use error::CapabilityError;
pub use liquidity::{LiquiditySnapshot, LiquiditySource};
pub use signer::Signer;
pub use time::{SystemClock, TimeSource};
