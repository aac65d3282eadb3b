//! # Conversions between Json Web Keys and [crate::types::KeyMaterial]

#[allow(clippy::module_inception)]
mod jwk;

pub(crate) use jwk::CustomJwk;
