use std::sync::Arc;

use tracing::trace;

use crate::types::{KeyInput, KeyMaterial, KeystoreError, KeystoreReturnType};

use super::Keystore;

/// # FixedKeystore
/// A [Keystore] that trusts one key for every issuer.
///
/// For deployments with a single signer. `trust` only confirms the fixed key and
/// `revoke_trust` does nothing, so trust can be neither widened nor dropped at runtime.
#[derive(Debug, Clone)]
pub struct FixedKeystore {
    key: Arc<KeyMaterial>,
}

impl FixedKeystore {
    /// Creates a store around `key`, normalized as by [KeyInput::normalize]
    pub fn new(key: impl Into<KeyInput>) -> KeystoreReturnType<Self> {
        Ok(Self::from_material(key.into().normalize()?))
    }

    /// Creates a store around an already normalized key
    pub fn from_material(key: KeyMaterial) -> Self {
        Self { key: Arc::new(key) }
    }

    /// The fixed key
    pub fn key(&self) -> &KeyMaterial {
        &self.key
    }
}

impl Keystore for FixedKeystore {
    /// Succeeds only when `key` is the fixed key. `issuer` plays no part.
    fn trust(&self, issuer: &str, key: KeyInput) -> KeystoreReturnType<()> {
        if key.normalize()? != *self.key {
            return Err(KeystoreError::new_conflict(issuer));
        }

        trace!(issuer, "fixed key confirmed");
        Ok(())
    }

    fn revoke_trust(&self, issuer: &str) {
        trace!(issuer, "ignoring revoke on fixed keystore");
    }

    fn get(&self, _issuer: &str) -> Option<Arc<KeyMaterial>> {
        Some(Arc::clone(&self.key))
    }
}
