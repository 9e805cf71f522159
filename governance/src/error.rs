use finpolicy_capabilities::CapabilityError;
use finpolicy_types::{PolicyError, ProposalId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("collaborator failed: {0}")]
    Capability(#[from] CapabilityError),

    #[error("proposal {0} has already been executed")]
    AlreadyExecuted(ProposalId),
}
