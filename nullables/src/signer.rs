//! Nullable signer: deterministic "signatures", no keys.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use finpolicy_capabilities::{CapabilityError, Signer};

/// Signs by prefixing the payload with a fixed tag.
#[derive(Default)]
pub struct NullSigner {
    fail: AtomicBool,
    signed: AtomicUsize,
}

impl NullSigner {
    pub const TAG: &'static [u8] = b"null-sig:";

    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `sign` calls fail (or succeed again).
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of successful signatures produced.
    pub fn signed_count(&self) -> usize {
        self.signed.load(Ordering::SeqCst)
    }
}

impl Signer for NullSigner {
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, CapabilityError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(CapabilityError::Rejected("signer offline".into()));
        }
        self.signed.fetch_add(1, Ordering::SeqCst);
        let mut signature = Self::TAG.to_vec();
        signature.extend_from_slice(payload);
        Ok(signature)
    }
}
