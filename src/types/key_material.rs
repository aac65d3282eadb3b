use std::{
    collections::HashSet,
    fmt::{self, Debug},
};

use zeroize::Zeroizing;

use crate::helpers::{pad_to_len, strip_leading_zeros};

use super::{KeystoreError, KeystoreReturnType};

/// Family of JWS algorithms a key can verify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// HS256, HS384, HS512
    Hmac,
    /// RS256, RS384, RS512, PS256, PS384, PS512
    Rsa,
    /// ES256, ES384, ES512, ES256K
    Ecdsa,
}

/// Elliptic curves accepted for EC public keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// NIST P-256
    P256,
    /// NIST P-384
    P384,
    /// NIST P-521
    P521,
    /// secp256k1
    Secp256k1,
}

impl Curve {
    /// Looks up a curve by its JWK `crv` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "P-256" => Some(Self::P256),
            "P-384" => Some(Self::P384),
            "P-521" => Some(Self::P521),
            "secp256k1" => Some(Self::Secp256k1),
            _ => None,
        }
    }

    /// JWK `crv` name of the curve
    pub fn name(&self) -> &'static str {
        match self {
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
            Self::Secp256k1 => "secp256k1",
        }
    }

    /// Size in bytes of one affine coordinate
    pub fn coordinate_len(&self) -> usize {
        match self {
            Self::P256 | Self::Secp256k1 => 32,
            Self::P384 => 48,
            Self::P521 => 66,
        }
    }

    /// The only JWS algorithm that signs with this curve
    pub fn jws_algorithm(&self) -> &'static str {
        match self {
            Self::P256 => "ES256",
            Self::P384 => "ES384",
            Self::P521 => "ES512",
            Self::Secp256k1 => "ES256K",
        }
    }
}

/// RSA public key as its numeric components.
///
/// Both components are unsigned big-endian integers with leading zero bytes removed,
/// so two keys are equal exactly when their numbers are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RsaPublicKey {
    n: Vec<u8>,
    e: Vec<u8>,
}

impl RsaPublicKey {
    /// Creates a key from the modulus and public exponent in big-endian bytes
    pub fn from_components(n: &[u8], e: &[u8]) -> KeystoreReturnType<Self> {
        let n = strip_leading_zeros(n);
        let e = strip_leading_zeros(e);

        if n.is_empty() || e.is_empty() {
            return Err(KeystoreError::new_invalid(
                "rsa modulus and exponent must be non zero",
            ));
        }

        Ok(Self {
            n: n.to_vec(),
            e: e.to_vec(),
        })
    }

    /// Modulus `n`
    pub fn modulus(&self) -> &[u8] {
        &self.n
    }

    /// Public exponent `e`
    pub fn exponent(&self) -> &[u8] {
        &self.e
    }

    /// Size of the modulus in bits
    pub fn bits(&self) -> usize {
        let leading = self.n.first().map(|b| b.leading_zeros() as usize).unwrap_or(0);
        self.n.len() * 8 - leading
    }
}

/// Elliptic curve public key as its curve and affine coordinates.
///
/// Coordinates are left padded to [Curve::coordinate_len].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EcPublicKey {
    curve: Curve,
    x: Vec<u8>,
    y: Vec<u8>,
}

impl EcPublicKey {
    /// Creates a key from big-endian affine coordinates
    pub fn from_coordinates(curve: Curve, x: &[u8], y: &[u8]) -> KeystoreReturnType<Self> {
        let len = curve.coordinate_len();

        Ok(Self {
            curve,
            x: pad_to_len(x, len).ok_or_else(|| {
                KeystoreError::new_invalid(format!("x coordinate too long for {}", curve.name()))
            })?,
            y: pad_to_len(y, len).ok_or_else(|| {
                KeystoreError::new_invalid(format!("y coordinate too long for {}", curve.name()))
            })?,
        })
    }

    /// Curve of the key
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Affine x coordinate
    pub fn x(&self) -> &[u8] {
        &self.x
    }

    /// Affine y coordinate
    pub fn y(&self) -> &[u8] {
        &self.y
    }
}

/// # KeyMaterial
/// A normalized verification key. This is what a keystore stores and hands back from `get`.
///
/// Private keys never appear here; they are reduced to their public half by
/// [super::KeyInput::normalize]. Equality compares values: bytes for secrets and
/// numeric components for public keys. Keys of different kinds are never equal.
#[derive(Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    /// Shared secret for the HMAC family. Scrubbed from memory on drop.
    Symmetric(Zeroizing<Vec<u8>>),
    /// RSA public key
    RsaPublic(RsaPublicKey),
    /// Elliptic curve public key
    EcPublic(EcPublicKey),
}

impl KeyMaterial {
    /// Creates a [KeyMaterial::Symmetric] from secret bytes
    pub fn symmetric(secret: impl Into<Vec<u8>>) -> Self {
        Self::Symmetric(Zeroizing::new(secret.into()))
    }

    /// JWK `kty` of the key: `oct`, `RSA` or `EC`
    pub fn key_type(&self) -> &'static str {
        match self {
            Self::Symmetric(_) => "oct",
            Self::RsaPublic(_) => "RSA",
            Self::EcPublic(_) => "EC",
        }
    }

    /// Algorithm family the key verifies
    pub fn algorithm_family(&self) -> AlgorithmFamily {
        match self {
            Self::Symmetric(_) => AlgorithmFamily::Hmac,
            Self::RsaPublic(_) => AlgorithmFamily::Rsa,
            Self::EcPublic(_) => AlgorithmFamily::Ecdsa,
        }
    }

    /// JWS algorithms this key can verify
    pub fn algorithms(&self) -> HashSet<String> {
        let mut algs: HashSet<String> = HashSet::new();

        match self {
            Self::Symmetric(_) => {
                algs.insert("HS256".to_string());
                algs.insert("HS384".to_string());
                algs.insert("HS512".to_string());
            }
            Self::RsaPublic(_) => {
                algs.insert("PS256".to_string());
                algs.insert("PS384".to_string());
                algs.insert("PS512".to_string());
                algs.insert("RS256".to_string());
                algs.insert("RS384".to_string());
                algs.insert("RS512".to_string());
            }
            Self::EcPublic(key) => {
                algs.insert(key.curve().jws_algorithm().to_string());
            }
        }

        algs
    }

    /// Checks if `alg` is one of [KeyMaterial::algorithms]
    pub fn supports_algorithm(&self, alg: &str) -> bool {
        self.algorithms().contains(alg)
    }

    /// Secret bytes, if this is a symmetric key
    pub fn as_secret(&self) -> Option<&[u8]> {
        match self {
            Self::Symmetric(secret) => Some(secret.as_slice()),
            _ => None,
        }
    }

    /// RSA public key, if this is one
    pub fn as_rsa(&self) -> Option<&RsaPublicKey> {
        match self {
            Self::RsaPublic(key) => Some(key),
            _ => None,
        }
    }

    /// EC public key, if this is one
    pub fn as_ec(&self) -> Option<&EcPublicKey> {
        match self {
            Self::EcPublic(key) => Some(key),
            _ => None,
        }
    }
}

impl From<RsaPublicKey> for KeyMaterial {
    fn from(value: RsaPublicKey) -> Self {
        Self::RsaPublic(value)
    }
}

impl From<EcPublicKey> for KeyMaterial {
    fn from(value: EcPublicKey) -> Self {
        Self::EcPublic(value)
    }
}

impl Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("KeyMaterial");
        debug.field("kty", &self.key_type());

        // a digest of a short secret is as good as the secret
        if let Self::Symmetric(secret) = self {
            return debug.field("len", &secret.len()).finish();
        }

        let thumbprint = self
            .thumbprint()
            .unwrap_or_else(|_| "<unavailable>".to_string());

        debug.field("thumbprint", &thumbprint).finish()
    }
}
