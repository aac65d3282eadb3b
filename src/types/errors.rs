use thiserror::Error;

/// # KeystoreError
/// Error that will be returned to the caller of a [crate::keystore::Keystore] operation
/// or of the key conversion helpers.
///
/// Looking up an issuer that has no key is not an error, see [crate::keystore::Keystore::get].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KeystoreError {
    /// The value handed to `trust` is not one of the accepted key shapes
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),

    /// A different key is already trusted for the issuer (or the key is not the fixed key)
    #[error("a different key is already trusted for issuer '{issuer}'")]
    TrustConflict {
        /// Issuer the conflicting key was offered for
        issuer: String,
    },

    /// The shape is supported but its content could not be decoded
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The key cannot verify signatures made with the requested algorithm
    #[error("unsupported algorithm for key: {0}")]
    UnsupportedAlgorithm(String),

    /// Keystore configuration could not be parsed or applied
    #[error("invalid keystore configuration: {0}")]
    Config(String),
}

impl KeystoreError {
    pub(crate) fn new_unsupported(description: impl Into<String>) -> Self {
        Self::UnsupportedKeyType(description.into())
    }

    pub(crate) fn new_invalid(description: impl Into<String>) -> Self {
        Self::InvalidKey(description.into())
    }

    pub(crate) fn new_conflict(issuer: &str) -> Self {
        Self::TrustConflict {
            issuer: issuer.to_string(),
        }
    }

    /// Returns true if this error is a [KeystoreError::TrustConflict]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::TrustConflict { .. })
    }
}

/// Result type used across the crate
pub type KeystoreReturnType<T> = Result<T, KeystoreError>;
