//! # Keystores
//! Where a token verifier looks up the key to check a token with, by the token's issuer.

mod dynamic;
mod fixed;
#[allow(clippy::module_inception)]
mod keystore;

pub use dynamic::DynamicKeystore;
pub use fixed::FixedKeystore;
pub use keystore::Keystore;
