//! Timelocked, exactly-once proposal execution.

use finpolicy_capabilities::{Signer, TimeSource};
use finpolicy_timelock::{Decision, TimelockGate};
use finpolicy_types::{LockSpan, LockTime, LockUnit, ProposalId};
use finpolicy_utils::spans::proposal_span;

use crate::error::GovernanceError;
use crate::proposal::Proposal;
use crate::store::ProposalStore;

/// Result of an execution attempt that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutionOutcome<U: LockUnit> {
    /// The payload was signed and the proposal is now marked executed.
    Executed {
        executed_at: LockTime<U>,
        signature: Vec<u8>,
    },
    /// Still timelocked; try again once `remaining` has elapsed.
    Deferred {
        unlock_at: LockTime<U>,
        remaining: LockSpan<U>,
    },
}

pub struct GovernanceExecutor<U: LockUnit, T, S, G> {
    gate: TimelockGate<U>,
    clock: T,
    store: S,
    signer: G,
}

impl<U, T, S, G> GovernanceExecutor<U, T, S, G>
where
    U: LockUnit,
    T: TimeSource<U>,
    S: ProposalStore<U>,
    G: Signer,
{
    pub fn new(gate: TimelockGate<U>, clock: T, store: S, signer: G) -> Self {
        Self {
            gate,
            clock,
            store,
            signer,
        }
    }

    pub fn gate(&self) -> &TimelockGate<U> {
        &self.gate
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a new proposal, stamping it with the current time.
    pub fn submit(&self, id: ProposalId) -> Result<Proposal<U>, GovernanceError> {
        let _span = proposal_span("submit", id.as_str()).entered();
        let created_at = self.clock.current()?;
        let unlock_at = self.gate.unlock_time(created_at)?;

        let proposal = Proposal::new(id, created_at);
        self.store.insert(proposal.clone())?;
        tracing::info!(%created_at, %unlock_at, "proposal submitted");
        Ok(proposal)
    }

    /// Gate decision for a stored proposal at the current time, without executing.
    pub fn check(&self, id: &ProposalId) -> Result<Decision<U>, GovernanceError> {
        let now = self.clock.current()?;
        self.decide(id, now)
    }

    /// Execute `id` if its timelock has elapsed.
    ///
    /// The payload is signed before the executed flag is claimed, so a signer
    /// failure leaves the proposal executable. Losing the compare-and-set to a
    /// concurrent caller yields [`GovernanceError::AlreadyExecuted`].
    pub fn try_execute(
        &self,
        id: &ProposalId,
        payload: &[u8],
    ) -> Result<ExecutionOutcome<U>, GovernanceError> {
        let _span = proposal_span("execute", id.as_str()).entered();
        let now = self.clock.current()?;

        match self.decide(id, now)? {
            Decision::Blocked {
                unlock_at,
                remaining,
            } => {
                tracing::debug!(%now, %unlock_at, %remaining, "execution deferred");
                Ok(ExecutionOutcome::Deferred {
                    unlock_at,
                    remaining,
                })
            }
            Decision::Allowed => {
                let signature = self.signer.sign(payload)?;
                if !self.store.mark_executed(id)? {
                    tracing::warn!("lost execution race");
                    return Err(GovernanceError::AlreadyExecuted(id.clone()));
                }
                tracing::info!(%now, signature = %hex::encode(&signature), "proposal executed");
                Ok(ExecutionOutcome::Executed {
                    executed_at: now,
                    signature,
                })
            }
        }
    }

    fn decide(&self, id: &ProposalId, now: LockTime<U>) -> Result<Decision<U>, GovernanceError> {
        let proposal = self.store.get(id)?;
        if proposal.is_executed() {
            return Err(GovernanceError::AlreadyExecuted(id.clone()));
        }
        Ok(self.gate.may_execute(proposal.created_at(), now)?)
    }
}
