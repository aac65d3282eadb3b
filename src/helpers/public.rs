use jwt_compact::jwk::JsonWebKey;
use sha2::Sha256;

use crate::types::{KeystoreError, KeystoreReturnType};

/// Gets the RFC 7638 S256 thumbprint of a JWK JSON, base64url encoded.
pub fn get_s256_jwk_thumbprint(jwk_str: &str) -> KeystoreReturnType<String> {
    let jwk: JsonWebKey<'_> = serde_json::from_str(jwk_str)
        .map_err(|e| KeystoreError::new_invalid(format!("invalid jwk: {e}")))?;

    Ok(base64_url::encode(&jwk.thumbprint::<Sha256>().to_vec()))
}
