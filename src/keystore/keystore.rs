use std::sync::Arc;

use crate::types::{KeyInput, KeyMaterial, KeystoreReturnType};

/// # Keystore
/// Resolves the key that verifies tokens from an issuer, and takes grants and revocations
/// of trust from the process that embeds it.
///
/// Implementations are safe to share between threads; callers never need to lock around them.
pub trait Keystore: Send + Sync {
    /// # Trust
    /// Asks the store to accept `key` for tokens whose `iss` is `issuer`.
    ///
    /// - `issuer` - Issuer identifier, compared case sensitively
    /// - `key` - Any [KeyInput] shape, eg. `"secret".into()` or `jwk.into()`
    ///
    /// Trusting the key that is already trusted for the issuer succeeds and changes nothing.
    fn trust(&self, issuer: &str, key: KeyInput) -> KeystoreReturnType<()>;

    /// # Revoke trust
    /// Asks the store to stop trusting any key for `issuer`. Unknown issuers are ignored.
    fn revoke_trust(&self, issuer: &str);

    /// # Get
    /// Key currently trusted for `issuer`, or `None`.
    ///
    /// `None` is the normal outcome for an unknown issuer. A verifier should reject the token,
    /// not retry.
    fn get(&self, issuer: &str) -> Option<Arc<KeyMaterial>>;
}

impl<T: Keystore + ?Sized> Keystore for Arc<T> {
    fn trust(&self, issuer: &str, key: KeyInput) -> KeystoreReturnType<()> {
        (**self).trust(issuer, key)
    }

    fn revoke_trust(&self, issuer: &str) {
        (**self).revoke_trust(issuer)
    }

    fn get(&self, issuer: &str) -> Option<Arc<KeyMaterial>> {
        (**self).get(issuer)
    }
}
