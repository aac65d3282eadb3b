use std::{
    collections::{hash_map::Entry, HashMap},
    fmt::{self, Debug},
    sync::Arc,
};

use parking_lot::RwLock;
use tracing::debug;

use crate::types::{KeyInput, KeyMaterial, KeystoreError, KeystoreReturnType};

use super::Keystore;

/// # DynamicKeystore
/// A [Keystore] mapping each issuer to its own key. Trust can be granted and revoked at any time.
///
/// The default value is an empty, ready to use store. Lookups share a read lock; grants and
/// revocations take the write lock.
///
/// ```
/// use jwt_keystore::keystore::{DynamicKeystore, Keystore};
///
/// let keystore = DynamicKeystore::new();
/// keystore.trust("https://issuer.example.com", "I like tacos".into()).unwrap();
///
/// assert!(keystore.get("https://issuer.example.com").is_some());
/// assert!(keystore.get("https://other.example.com").is_none());
/// ```
#[derive(Default)]
pub struct DynamicKeystore {
    keys: RwLock<HashMap<String, Arc<KeyMaterial>>>,
}

impl DynamicKeystore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of issuers with a trusted key
    pub fn len(&self) -> usize {
        self.keys.read().len()
    }

    /// Returns if no issuer is trusted
    pub fn is_empty(&self) -> bool {
        self.keys.read().is_empty()
    }

    /// Returns if `issuer` has a trusted key
    pub fn contains(&self, issuer: &str) -> bool {
        self.keys.read().contains_key(issuer)
    }

    /// Trusted issuers, sorted
    pub fn issuers(&self) -> Vec<String> {
        let mut issuers: Vec<String> = self.keys.read().keys().cloned().collect();
        issuers.sort();
        issuers
    }
}

impl Keystore for DynamicKeystore {
    /// Private keys are stored as their public key and text as its bytes.
    ///
    /// Fails with [KeystoreError::TrustConflict] if a different key is already trusted for
    /// `issuer`. The store is left unchanged on every error.
    fn trust(&self, issuer: &str, key: KeyInput) -> KeystoreReturnType<()> {
        // normalization only reads its input, so it can run before the lock is taken
        let key = key.normalize()?;

        let mut keys = self.keys.write();

        match keys.entry(issuer.to_string()) {
            Entry::Occupied(existing) => {
                if **existing.get() == key {
                    Ok(())
                } else {
                    Err(KeystoreError::new_conflict(issuer))
                }
            }
            Entry::Vacant(slot) => {
                debug!(issuer, kty = key.key_type(), "trusting key for issuer");
                slot.insert(Arc::new(key));
                Ok(())
            }
        }
    }

    fn revoke_trust(&self, issuer: &str) {
        if self.keys.write().remove(issuer).is_some() {
            debug!(issuer, "revoked trust for issuer");
        }
    }

    fn get(&self, issuer: &str) -> Option<Arc<KeyMaterial>> {
        self.keys.read().get(issuer).cloned()
    }
}

impl Debug for DynamicKeystore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicKeystore")
            .field("issuers", &self.issuers())
            .finish()
    }
}
