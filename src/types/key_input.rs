use std::fmt::{self, Debug};

use josekit::jwk::Jwk;
use serde_json::Value;

use crate::{helpers::pem_to_key_material, jwk::CustomJwk};

use super::{KeyMaterial, KeystoreError, KeystoreReturnType};

/// # KeyInput
/// The shapes a key may take when it is handed to [crate::keystore::Keystore::trust].
///
/// Every shape is reduced to a [KeyMaterial] by [KeyInput::normalize]:
///
/// - raw bytes are a shared secret
/// - text is a shared secret made of its UTF-8 bytes
/// - a JWK (`oct`, `RSA` or `EC`) becomes a secret or a public key; private members are dropped
/// - a PEM encoded RSA or EC key (private or public) becomes a public key
/// - a JSON value is read as text (string), bytes (array of 0-255) or a JWK (object)
#[derive(Clone)]
pub enum KeyInput {
    /// Raw shared secret
    Bytes(Vec<u8>),
    /// Textual shared secret
    Text(String),
    /// Json Web Key, public or private
    Jwk(Jwk),
    /// PEM encoded RSA or EC key, public or private
    Pem(String),
    /// Untyped JSON value, see [KeyInput]
    Json(Value),
    /// Already normalized key
    Material(KeyMaterial),
}

impl KeyInput {
    /// Creates a [KeyInput::Pem]
    pub fn pem(pem: impl Into<String>) -> Self {
        Self::Pem(pem.into())
    }

    /// Converts the input to the key that will be stored.
    ///
    /// Fails with [KeystoreError::UnsupportedKeyType] when the input is not an accepted shape and
    /// with [KeystoreError::InvalidKey] when its content cannot be decoded.
    pub fn normalize(self) -> KeystoreReturnType<KeyMaterial> {
        match self {
            Self::Bytes(bytes) => Ok(KeyMaterial::symmetric(bytes)),
            Self::Text(text) => Ok(KeyMaterial::symmetric(text.into_bytes())),
            Self::Jwk(jwk) => jwk.to_key_material(),
            Self::Pem(pem) => pem_to_key_material(pem.as_bytes()),
            Self::Json(value) => json_to_key_material(value),
            Self::Material(material) => Ok(material),
        }
    }
}

fn json_to_key_material(value: Value) -> KeystoreReturnType<KeyMaterial> {
    match value {
        Value::String(text) => Ok(KeyMaterial::symmetric(text.into_bytes())),
        Value::Array(items) => {
            let bytes = items
                .iter()
                .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
                .collect::<Option<Vec<u8>>>()
                .ok_or_else(|| KeystoreError::new_unsupported("array of non byte values"))?;

            Ok(KeyMaterial::symmetric(bytes))
        }
        Value::Object(_) => {
            let jwk: Jwk = serde_json::from_value(value)
                .map_err(|e| KeystoreError::new_invalid(format!("object is not a jwk: {e}")))?;

            jwk.to_key_material()
        }
        Value::Number(_) => Err(KeystoreError::new_unsupported("number")),
        Value::Bool(_) => Err(KeystoreError::new_unsupported("bool")),
        Value::Null => Err(KeystoreError::new_unsupported("null")),
    }
}

impl Debug for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self {
            Self::Bytes(_) => "Bytes",
            Self::Text(_) => "Text",
            Self::Jwk(_) => "Jwk",
            Self::Pem(_) => "Pem",
            Self::Json(_) => "Json",
            Self::Material(_) => "Material",
        };

        f.debug_tuple("KeyInput").field(&shape).finish()
    }
}

impl From<Vec<u8>> for KeyInput {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for KeyInput {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<&Vec<u8>> for KeyInput {
    fn from(value: &Vec<u8>) -> Self {
        Self::Bytes(value.clone())
    }
}

impl<const N: usize> From<&[u8; N]> for KeyInput {
    fn from(value: &[u8; N]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<String> for KeyInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for KeyInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&String> for KeyInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Jwk> for KeyInput {
    fn from(value: Jwk) -> Self {
        Self::Jwk(value)
    }
}

impl From<&Jwk> for KeyInput {
    fn from(value: &Jwk) -> Self {
        Self::Jwk(value.clone())
    }
}

impl From<Value> for KeyInput {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<KeyMaterial> for KeyInput {
    fn from(value: KeyMaterial) -> Self {
        Self::Material(value)
    }
}

impl From<&KeyMaterial> for KeyInput {
    fn from(value: &KeyMaterial) -> Self {
        Self::Material(value.clone())
    }
}
