use std::sync::Arc;

use serde_json::json;

use crate::{
    keystore::{FixedKeystore, Keystore},
    types::{KeyInput, KeyMaterial, KeystoreError},
};

use super::fixtures::{EC_PEM_1, HMAC_KEY_1, HMAC_KEY_2, RSA_PEM_1, RSA_PEM_2};

fn get_keystore() -> FixedKeystore {
    FixedKeystore::new(HMAC_KEY_1).unwrap()
}

#[test]
fn accepts_the_single_key() {
    let keystore = get_keystore();
    let dupe = HMAC_KEY_1.to_vec();

    assert!(keystore.trust("moo", HMAC_KEY_1.into()).is_ok());
    assert!(keystore.trust("bah", HMAC_KEY_1.into()).is_ok());
    assert!(keystore.trust("oink", dupe.into()).is_ok());
    assert!(keystore.trust("oink", "I like tacos".into()).is_ok());
}

#[test]
fn rejects_any_other_key() {
    let keystore = get_keystore();

    assert_eq!(
        KeystoreError::TrustConflict {
            issuer: "moo".to_string()
        },
        keystore.trust("moo", HMAC_KEY_2.into()).unwrap_err()
    );
    assert!(keystore
        .trust("moo", KeyInput::pem(RSA_PEM_1))
        .unwrap_err()
        .is_conflict());
}

#[test]
fn rejects_unsupported_keys() {
    let keystore = get_keystore();

    assert!(matches!(
        keystore.trust("moo", json!(42).into()).unwrap_err(),
        KeystoreError::UnsupportedKeyType(_)
    ));
}

#[test]
fn revoke_does_nothing() {
    let keystore = get_keystore();

    keystore.revoke_trust("moo");

    assert_eq!(
        KeyMaterial::symmetric(HMAC_KEY_1),
        *keystore.get("moo").unwrap()
    );
}

#[test]
fn always_returns_the_same_key() {
    let keystore = get_keystore();

    assert_eq!(
        KeyMaterial::symmetric(HMAC_KEY_1),
        *keystore.get("moo").unwrap()
    );
    assert_eq!(
        KeyMaterial::symmetric(HMAC_KEY_1),
        *keystore.get("bah").unwrap()
    );
    assert_eq!(
        KeyMaterial::symmetric(HMAC_KEY_1),
        *keystore.get("").unwrap()
    );
    assert_eq!(&KeyMaterial::symmetric(HMAC_KEY_1), keystore.key());
}

#[test]
fn stores_the_public_half_of_a_private_key() {
    let keystore = FixedKeystore::new(KeyInput::pem(RSA_PEM_1)).unwrap();
    let public = keystore.key().to_jwk().unwrap();

    assert!(keystore.get("anyone").unwrap().as_rsa().is_some());
    assert!(keystore.trust("anyone", public.into()).is_ok());
    assert!(keystore.trust("anyone", KeyInput::pem(RSA_PEM_1)).is_ok());
    assert!(keystore
        .trust("anyone", KeyInput::pem(RSA_PEM_2))
        .unwrap_err()
        .is_conflict());
}

#[test]
fn cannot_be_created_with_an_unsupported_key() {
    assert!(matches!(
        FixedKeystore::new(json!(null)).unwrap_err(),
        KeystoreError::UnsupportedKeyType(_)
    ));
}

#[test]
fn is_interchangeable_with_other_keystores() {
    let keystore: Arc<dyn Keystore> =
        Arc::new(FixedKeystore::new(KeyInput::pem(EC_PEM_1)).unwrap());

    let key = keystore.get("https://issuer.example.com").unwrap();

    assert_eq!(Some(&*key), keystore.get("somebody else").as_deref());
}

#[test]
fn conflict_message_names_the_issuer_only() {
    let err = get_keystore().trust("moo", HMAC_KEY_2.into()).unwrap_err();

    assert_eq!(
        "a different key is already trusted for issuer 'moo'",
        err.to_string()
    );
}
