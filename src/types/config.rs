use std::{
    collections::BTreeMap,
    fmt::{self, Debug},
    sync::Arc,
};

use base64::engine::{general_purpose::STANDARD, Engine};
use josekit::jwk::Jwk;
use serde::Deserialize;

use crate::keystore::{DynamicKeystore, FixedKeystore, Keystore};

use super::{KeyInput, KeystoreError, KeystoreReturnType};

/// # KeystoreConfig
/// Description of a keystore that the embedding process can keep in its own configuration.
///
/// ```json
/// {
///   "mode": "dynamic",
///   "trust": {
///     "https://a.example.com": { "type": "secret", "value": "I like tacos" },
///     "https://b.example.com": { "type": "jwk", "value": { "kty": "EC", "crv": "P-256", "x": "..", "y": ".." } }
///   }
/// }
/// ```
///
/// ```json
/// { "mode": "fixed", "key": { "type": "pem", "value": "-----BEGIN PUBLIC KEY-----\n..." } }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum KeystoreConfig {
    /// Builds a [FixedKeystore]
    Fixed {
        /// The single trusted key
        key: KeySource,
    },
    /// Builds a [DynamicKeystore]
    Dynamic {
        /// Issuer to key table trusted at build time
        #[serde(default)]
        trust: BTreeMap<String, KeySource>,
    },
}

/// Key as written in a [KeystoreConfig]
#[derive(Clone, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum KeySource {
    /// Text secret, used as its UTF-8 bytes
    Secret(String),
    /// Standard base64 encoded secret bytes
    SecretBase64(String),
    /// PEM encoded RSA or EC key
    Pem(String),
    /// Json Web Key
    Jwk(Jwk),
}

impl KeySource {
    /// Converts the configured key to a [KeyInput]
    pub fn into_key_input(self) -> KeystoreReturnType<KeyInput> {
        match self {
            Self::Secret(text) => Ok(KeyInput::Text(text)),
            Self::SecretBase64(encoded) => STANDARD
                .decode(encoded.trim())
                .map(KeyInput::Bytes)
                .map_err(|e| KeystoreError::new_invalid(format!("secret is not base64: {e}"))),
            Self::Pem(pem) => Ok(KeyInput::Pem(pem)),
            Self::Jwk(jwk) => Ok(KeyInput::Jwk(jwk)),
        }
    }
}

impl Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secret(_) => f.write_str("Secret(..)"),
            Self::SecretBase64(_) => f.write_str("SecretBase64(..)"),
            Self::Pem(_) => f.write_str("Pem(..)"),
            Self::Jwk(jwk) => f.debug_tuple("Jwk").field(&jwk.key_type()).finish(),
        }
    }
}

impl KeystoreConfig {
    /// Parses a configuration from JSON
    pub fn from_json(json: &str) -> KeystoreReturnType<Self> {
        serde_json::from_str(json).map_err(|e| KeystoreError::Config(e.to_string()))
    }

    /// Builds the configured keystore.
    ///
    /// Fails with the error of the first key that could not be trusted.
    pub fn build(self) -> KeystoreReturnType<Arc<dyn Keystore>> {
        match self {
            Self::Fixed { key } => Ok(Arc::new(FixedKeystore::new(key.into_key_input()?)?)),
            Self::Dynamic { trust } => {
                let keystore = DynamicKeystore::new();

                for (issuer, source) in trust {
                    keystore.trust(&issuer, source.into_key_input()?)?;
                }

                Ok(Arc::new(keystore))
            }
        }
    }
}
