use josekit::jwk::Jwk;

use crate::types::{KeystoreError, KeystoreReturnType};

pub(crate) fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Left pads `bytes` with zeros to `len`. None if the number does not fit.
pub(crate) fn pad_to_len(bytes: &[u8], len: usize) -> Option<Vec<u8>> {
    let bytes = strip_leading_zeros(bytes);

    if bytes.len() > len {
        return None;
    }

    let mut padded = vec![0u8; len - bytes.len()];
    padded.extend_from_slice(bytes);
    Some(padded)
}

/// Reads a base64url encoded member of a jwk, eg. `n` or `x`
pub(crate) fn decode_jwk_member(jwk: &Jwk, name: &str) -> KeystoreReturnType<Vec<u8>> {
    let encoded = jwk
        .parameter(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            KeystoreError::new_invalid(format!(
                "{} jwk is missing member '{}'",
                jwk.key_type(),
                name
            ))
        })?;

    base64_url::decode(encoded).map_err(|_| {
        KeystoreError::new_invalid(format!("jwk member '{}' is not base64url", name))
    })
}
