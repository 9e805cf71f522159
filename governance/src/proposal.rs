//! Governance proposals as seen by the executor.

use finpolicy_types::{LockTime, LockUnit, ProposalId};
use serde::{Deserialize, Serialize};

/// A proposal awaiting (or past) execution.
///
/// `created_at` is captured once at submission and never re-sampled.
/// `executed` only ever moves from `false` to `true`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Proposal<U: LockUnit> {
    id: ProposalId,
    created_at: LockTime<U>,
    executed: bool,
}

impl<U: LockUnit> Proposal<U> {
    pub fn new(id: ProposalId, created_at: LockTime<U>) -> Self {
        Self {
            id,
            created_at,
            executed: false,
        }
    }

    pub fn id(&self) -> &ProposalId {
        &self.id
    }

    pub fn created_at(&self) -> LockTime<U> {
        self.created_at
    }

    pub fn is_executed(&self) -> bool {
        self.executed
    }

    /// Set the executed flag. Returns `true` only for the call that flipped it.
    pub fn mark_executed(&mut self) -> bool {
        !std::mem::replace(&mut self.executed, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finpolicy_types::Timestamp;

    #[test]
    fn executed_flag_flips_once() {
        let mut p = Proposal::new(ProposalId::new("p-1"), Timestamp::from_millis(5));
        assert!(!p.is_executed());
        assert!(p.mark_executed());
        assert!(!p.mark_executed());
        assert!(p.is_executed());
    }
}
