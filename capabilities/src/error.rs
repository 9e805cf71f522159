use thiserror::Error;

/// Failure reported by an external collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    Duplicate(String),

    #[error("request rejected: {0}")]
    Rejected(String),
}
