//! # Types Module
//! Keys, key inputs, configuration and errors

mod config;
mod errors;
mod key_input;
mod key_material;

pub use config::{KeySource, KeystoreConfig};
pub use errors::{KeystoreError, KeystoreReturnType};
pub use key_input::KeyInput;
pub use key_material::{AlgorithmFamily, Curve, EcPublicKey, KeyMaterial, RsaPublicKey};
