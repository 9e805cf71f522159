//! Proposal storage capability.

use finpolicy_capabilities::CapabilityError;
use finpolicy_types::{LockUnit, ProposalId};

use crate::proposal::Proposal;

/// Where the executor keeps proposals.
///
/// `mark_executed` must be atomic with respect to other callers: exactly one
/// caller observes `Ok(true)` for a given proposal.
pub trait ProposalStore<U: LockUnit>: Send + Sync {
    /// Fails with [`CapabilityError::Duplicate`] if the id is taken.
    fn insert(&self, proposal: Proposal<U>) -> Result<(), CapabilityError>;

    fn get(&self, id: &ProposalId) -> Result<Proposal<U>, CapabilityError>;

    /// Compare-and-set the executed flag from `false` to `true`.
    fn mark_executed(&self, id: &ProposalId) -> Result<bool, CapabilityError>;
}
