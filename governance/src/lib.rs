//! Governance execution behind a relative timelock.
//!
//! The executor owns the proposal lifecycle around the pure gate:
//! - **submit** samples the clock exactly once and records the creation time
//! - **try_execute** re-checks the gate with a fresh current time, signs the
//!   execution payload and flips the executed flag with compare-and-set
//!
//! A proposal executes at most once, even under concurrent callers.

pub mod error;
pub mod executor;
pub mod proposal;
pub mod store;

pub use error::GovernanceError;
pub use executor::{ExecutionOutcome, GovernanceExecutor};
pub use proposal::Proposal;
pub use store::ProposalStore;
