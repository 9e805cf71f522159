//! Nullable proposal store: thread-safe in-memory storage for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use finpolicy_capabilities::CapabilityError;
use finpolicy_governance::{Proposal, ProposalStore};
use finpolicy_types::{LockUnit, ProposalId};

pub struct NullProposalStore<U: LockUnit> {
    proposals: Mutex<HashMap<ProposalId, Proposal<U>>>,
}

impl<U: LockUnit> NullProposalStore<U> {
    pub fn new() -> Self {
        Self {
            proposals: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.proposals.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<U: LockUnit> Default for NullProposalStore<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: LockUnit> ProposalStore<U> for NullProposalStore<U> {
    fn insert(&self, proposal: Proposal<U>) -> Result<(), CapabilityError> {
        let mut proposals = self.proposals.lock().unwrap();
        if proposals.contains_key(proposal.id()) {
            return Err(CapabilityError::Duplicate(format!("proposal {}", proposal.id())));
        }
        proposals.insert(proposal.id().clone(), proposal);
        Ok(())
    }

    fn get(&self, id: &ProposalId) -> Result<Proposal<U>, CapabilityError> {
        self.proposals
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| CapabilityError::NotFound(format!("proposal {id}")))
    }

    fn mark_executed(&self, id: &ProposalId) -> Result<bool, CapabilityError> {
        self.proposals
            .lock()
            .unwrap()
            .get_mut(id)
            .map(Proposal::mark_executed)
            .ok_or_else(|| CapabilityError::NotFound(format!("proposal {id}")))
    }
}
