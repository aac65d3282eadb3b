use josekit::{
    jwk::Jwk,
    jws::{
        alg::{
            ecdsa::EcdsaJwsAlgorithm, hmac::HmacJwsAlgorithm, rsassa::RsassaJwsAlgorithm,
            rsassa_pss::RsassaPssJwsAlgorithm,
        },
        JwsVerifier,
    },
    JoseError,
};
use serde_json::{Map, Value};
use tracing::trace;

use crate::{
    helpers::{decode_jwk_member, get_s256_jwk_thumbprint},
    types::{Curve, EcPublicKey, KeyMaterial, KeystoreError, KeystoreReturnType, RsaPublicKey},
};

pub(crate) trait CustomJwk {
    fn is_private_key(&self) -> bool;

    fn to_key_material(&self) -> KeystoreReturnType<KeyMaterial>;
}

impl CustomJwk for Jwk {
    fn is_private_key(&self) -> bool {
        self.key_type() == "oct" || self.parameter("d").is_some()
    }

    fn to_key_material(&self) -> KeystoreReturnType<KeyMaterial> {
        if self.is_private_key() && self.key_type() != "oct" {
            trace!(kty = self.key_type(), "reducing private jwk to its public key");
        }

        match self.key_type() {
            "oct" => Ok(KeyMaterial::symmetric(decode_jwk_member(self, "k")?)),
            "RSA" => {
                let n = decode_jwk_member(self, "n")?;
                let e = decode_jwk_member(self, "e")?;

                RsaPublicKey::from_components(&n, &e).map(KeyMaterial::from)
            }
            "EC" => {
                let crv = self.curve().ok_or_else(|| {
                    KeystoreError::new_invalid("EC jwk is missing member 'crv'")
                })?;
                let curve = Curve::from_name(crv).ok_or_else(|| {
                    KeystoreError::new_unsupported(format!("ec curve '{}'", crv))
                })?;

                let x = decode_jwk_member(self, "x")?;
                let y = decode_jwk_member(self, "y")?;

                EcPublicKey::from_coordinates(curve, &x, &y).map(KeyMaterial::from)
            }
            other => Err(KeystoreError::new_unsupported(format!(
                "jwk key type '{}'",
                other
            ))),
        }
    }
}

/// Json Web Key representations of [KeyMaterial]
impl KeyMaterial {
    /// The members that identify the key, as listed by RFC 7638
    fn jwk_members(&self) -> Map<String, Value> {
        let mut members = Map::new();

        match self {
            KeyMaterial::Symmetric(secret) => {
                members.insert("kty".to_string(), Value::from("oct"));
                members.insert("k".to_string(), Value::from(base64_url::encode(secret.as_slice())));
            }
            KeyMaterial::RsaPublic(key) => {
                members.insert("kty".to_string(), Value::from("RSA"));
                members.insert("n".to_string(), Value::from(base64_url::encode(key.modulus())));
                members.insert("e".to_string(), Value::from(base64_url::encode(key.exponent())));
            }
            KeyMaterial::EcPublic(key) => {
                members.insert("kty".to_string(), Value::from("EC"));
                members.insert("crv".to_string(), Value::from(key.curve().name()));
                members.insert("x".to_string(), Value::from(base64_url::encode(key.x())));
                members.insert("y".to_string(), Value::from(base64_url::encode(key.y())));
            }
        }

        members
    }

    /// Converts the key to a [Jwk]. Secrets become `oct` keys carrying `k`.
    pub fn to_jwk(&self) -> KeystoreReturnType<Jwk> {
        serde_json::from_value(Value::Object(self.jwk_members()))
            .map_err(|e| KeystoreError::new_invalid(format!("cannot build jwk: {e}")))
    }

    /// RFC 7638 SHA-256 thumbprint of the key, base64url encoded
    pub fn thumbprint(&self) -> KeystoreReturnType<String> {
        get_s256_jwk_thumbprint(&Value::Object(self.jwk_members()).to_string())
    }

    /// # Jws verifier
    /// Creates a josekit [JwsVerifier] that checks `alg` signatures with this key.
    ///
    /// - `alg` - JWS algorithm from the token header. Must be one of [KeyMaterial::algorithms]
    pub fn to_verifier(&self, alg: &str) -> KeystoreReturnType<Box<dyn JwsVerifier>> {
        if !self.supports_algorithm(alg) {
            return Err(KeystoreError::UnsupportedAlgorithm(format!(
                "{} cannot be verified with a {} key",
                alg,
                self.key_type()
            )));
        }

        let jwk = self.to_jwk()?;

        let error = |e: JoseError| {
            KeystoreError::new_invalid(format!("error when creating a jws verifier: {e}"))
        };

        match alg {
            "HS256" => Ok(Box::new(
                HmacJwsAlgorithm::Hs256.verifier_from_jwk(&jwk).map_err(error)?,
            )),
            "HS384" => Ok(Box::new(
                HmacJwsAlgorithm::Hs384.verifier_from_jwk(&jwk).map_err(error)?,
            )),
            "HS512" => Ok(Box::new(
                HmacJwsAlgorithm::Hs512.verifier_from_jwk(&jwk).map_err(error)?,
            )),
            "RS256" => Ok(Box::new(
                RsassaJwsAlgorithm::Rs256.verifier_from_jwk(&jwk).map_err(error)?,
            )),
            "RS384" => Ok(Box::new(
                RsassaJwsAlgorithm::Rs384.verifier_from_jwk(&jwk).map_err(error)?,
            )),
            "RS512" => Ok(Box::new(
                RsassaJwsAlgorithm::Rs512.verifier_from_jwk(&jwk).map_err(error)?,
            )),
            "PS256" => Ok(Box::new(
                RsassaPssJwsAlgorithm::Ps256.verifier_from_jwk(&jwk).map_err(error)?,
            )),
            "PS384" => Ok(Box::new(
                RsassaPssJwsAlgorithm::Ps384.verifier_from_jwk(&jwk).map_err(error)?,
            )),
            "PS512" => Ok(Box::new(
                RsassaPssJwsAlgorithm::Ps512.verifier_from_jwk(&jwk).map_err(error)?,
            )),
            "ES256" => Ok(Box::new(
                EcdsaJwsAlgorithm::Es256.verifier_from_jwk(&jwk).map_err(error)?,
            )),
            "ES384" => Ok(Box::new(
                EcdsaJwsAlgorithm::Es384.verifier_from_jwk(&jwk).map_err(error)?,
            )),
            "ES512" => Ok(Box::new(
                EcdsaJwsAlgorithm::Es512.verifier_from_jwk(&jwk).map_err(error)?,
            )),
            "ES256K" => Ok(Box::new(
                EcdsaJwsAlgorithm::Es256k.verifier_from_jwk(&jwk).map_err(error)?,
            )),
            _ => Err(KeystoreError::UnsupportedAlgorithm(alg.to_string())),
        }
    }
}
