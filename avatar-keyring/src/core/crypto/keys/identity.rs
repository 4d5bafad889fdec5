//! Identity keypair derivation
//!
//! The identity keys are an opaque bag as far as the rest of the keyring is
//! concerned: whatever map an [`IdentityDerivation`] returns is merged verbatim
//! into the top level of the secret record.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ed25519_dalek::SigningKey;
use serde_json::{Map, Value};
use zeroize::Zeroizing;

use super::SecureSeedPhrase;
use crate::shared::constants::{ED25519_SEED_SIZE, IDENTITY_CURVE, IDENTITY_ID_FIELD, IDENTITY_KEY_SUFFIX};
use crate::shared::error::Result;
use crate::shared::utils::sha256_hash;

/// Derives the identity key bag from a validated mnemonic
pub trait IdentityDerivation: Send + Sync {
    fn derive(&self, phrase: &SecureSeedPhrase) -> Result<Map<String, Value>>;
}

/// Default identity: an ed25519 keypair seeded by the mnemonic's entropy.
///
/// 24-word phrases carry exactly 32 bytes of entropy, used as the seed
/// directly; shorter phrases are stretched with SHA-256. The bag holds
/// `curve`, `public`, `private` (64-byte keypair) and `id` (`@` + public).
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Identity;

impl Ed25519Identity {
    fn seed_from_entropy(entropy: &[u8]) -> Zeroizing<[u8; ED25519_SEED_SIZE]> {
        let mut seed = Zeroizing::new([0u8; ED25519_SEED_SIZE]);
        if entropy.len() == ED25519_SEED_SIZE {
            seed.copy_from_slice(entropy);
        } else {
            seed.copy_from_slice(&sha256_hash(entropy));
        }
        seed
    }
}

impl IdentityDerivation for Ed25519Identity {
    fn derive(&self, phrase: &SecureSeedPhrase) -> Result<Map<String, Value>> {
        let entropy = phrase.to_entropy();
        let seed = Self::seed_from_entropy(&entropy);

        let signing_key = SigningKey::from_bytes(&seed);
        let keypair_bytes = Zeroizing::new(signing_key.to_keypair_bytes());

        let public = format!(
            "{}{}",
            STANDARD.encode(signing_key.verifying_key().as_bytes()),
            IDENTITY_KEY_SUFFIX
        );
        let private = format!("{}{}", STANDARD.encode(&*keypair_bytes), IDENTITY_KEY_SUFFIX);

        let mut keys = Map::new();
        keys.insert("curve".to_string(), Value::String(IDENTITY_CURVE.to_string()));
        keys.insert("public".to_string(), Value::String(public.clone()));
        keys.insert("private".to_string(), Value::String(private));
        keys.insert(IDENTITY_ID_FIELD.to_string(), Value::String(format!("@{}", public)));
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn derive(phrase: &str) -> Map<String, Value> {
        let phrase = SecureSeedPhrase::parse(phrase).expect("Failed to parse mnemonic");
        Ed25519Identity.derive(&phrase).expect("Failed to derive identity")
    }

    #[test]
    fn test_identity_bag_shape() {
        let keys = derive(TEST_MNEMONIC);
        let field_names: Vec<&str> = keys.keys().map(String::as_str).collect();
        assert_eq!(field_names, vec!["curve", "public", "private", "id"]);

        let public = keys["public"].as_str().expect("public is a string");
        let private = keys["private"].as_str().expect("private is a string");
        assert!(public.ends_with(".ed25519"));
        assert!(private.ends_with(".ed25519"));
        assert_eq!(keys["id"].as_str(), Some(format!("@{}", public).as_str()));
        assert_eq!(keys["curve"], "ed25519");
    }

    #[test]
    fn test_private_embeds_public() {
        let keys = derive(TEST_MNEMONIC);
        let public = keys["public"].as_str().unwrap().trim_end_matches(".ed25519");
        let private = keys["private"].as_str().unwrap().trim_end_matches(".ed25519");

        let public_bytes = STANDARD.decode(public).expect("public is base64");
        let private_bytes = STANDARD.decode(private).expect("private is base64");
        assert_eq!(public_bytes.len(), 32);
        assert_eq!(private_bytes.len(), 64);
        assert_eq!(&private_bytes[32..], public_bytes.as_slice());
    }

    #[test]
    fn test_identity_is_deterministic() {
        assert_eq!(derive(TEST_MNEMONIC), derive(TEST_MNEMONIC));
    }

    #[test]
    fn test_full_entropy_used_directly() {
        let phrase = SecureSeedPhrase::generate().expect("Failed to generate phrase");
        let entropy = phrase.to_entropy();
        let seed = Ed25519Identity::seed_from_entropy(&entropy);
        assert_eq!(&seed[..], entropy.as_slice());
    }
}
