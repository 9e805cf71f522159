//! Fundamental types for the financial policy core.
//!
//! Shared by every other crate in the workspace: unit-tagged lock points and
//! spans, channel amounts, opaque identifiers, and the `InvalidInput` error.

pub mod amount;
pub mod error;
pub mod id;
pub mod time;

pub use amount::Sats;
pub use error::PolicyError;
pub use id::{ChannelId, ProposalId};
pub use time::{
    BlockDelay, BlockHeight, Blocks, Delay, LockSpan, LockTime, LockUnit, Millis, Timestamp,
};
