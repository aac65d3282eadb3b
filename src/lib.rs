#![warn(missing_docs)]
//! # JWT Keystore
//!
//! Trust management for JWT bearer token verification: given the `iss` claim of a token,
//! which key must its signature be checked with?
//!
//! ## Keystore API
//!
//! - [keystore::Keystore::trust]
//! - [keystore::Keystore::revoke_trust]
//! - [keystore::Keystore::get]
//!
//! ### Implementations
//! - [keystore::DynamicKeystore] - one key per issuer, changed at runtime
//! - [keystore::FixedKeystore] - one key for every issuer
//!
//! ### From configuration
//! - [types::KeystoreConfig::from_json]
//! - [types::KeystoreConfig::build]
//!
//! ## Keys
//!
//! Keys are handed in as any [types::KeyInput] shape (bytes, text, JWK, PEM, JSON) and stored
//! as [types::KeyMaterial]: a shared secret, an RSA public key or an EC public key.
//!
//! - [types::KeyMaterial::algorithms]
//! - [types::KeyMaterial::to_jwk]
//! - [types::KeyMaterial::thumbprint]
//! - [types::KeyMaterial::to_verifier]

mod helpers;
mod jwk;
pub mod keystore;
#[cfg(test)]
mod tests;
pub mod types;

/// Re exports from the crate
pub mod re_exports {
    pub use josekit::{self};
    pub use serde_json::{self, json, Value};
}
