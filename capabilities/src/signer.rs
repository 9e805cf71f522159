//! Wallet signing.

use crate::error::CapabilityError;

/// Signs an execution payload (for instance a PSBT) with a wallet key.
///
/// The policy core never holds keys; only the governance executor invokes this.
pub trait Signer: Send + Sync {
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, CapabilityError>;
}

impl<T: Signer + ?Sized> Signer for &T {
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, CapabilityError> {
        (**self).sign(payload)
    }
}
