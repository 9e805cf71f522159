//! Timelock gate for governance proposals.
//!
//! Emulates a relative locktime (BIP 112 `CHECKSEQUENCEVERIFY`) off-chain: a
//! proposal may execute only once a fixed delay has elapsed since it was
//! created. The gate never reads a clock; callers capture the creation time
//! once and pass the current time on every check.

pub mod gate;
pub mod policy;

pub use gate::{may_execute, Decision, TimelockGate};
pub use policy::TimelockPolicy;
