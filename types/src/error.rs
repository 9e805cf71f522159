//! The single error kind of the policy core.

use thiserror::Error;

/// A precondition violation in a policy call.
///
/// Returned synchronously and never retried internally: the same inputs will
/// always be rejected again. A blocked timelock is *not* an error.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolicyError {
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl PolicyError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }
}
