//! Ethereum key generation and derivation
//!
//! Derives the Ethereum keypair of a secret record from a BIP-39 seed along the
//! standard BIP-44 path, or generates a random one for records that predate
//! Ethereum support.

use bip32::{DerivationPath, XPrv};
use ethers::types::Address;
use ethers::utils::to_checksum;
use rand_core::{OsRng, RngCore};
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use std::str::FromStr;
use zeroize::Zeroizing;

use crate::domain::entities::EthKeys;
use crate::shared::constants::{ETHEREUM_DERIVATION_PATH, PRIVATE_KEY_SIZE};
use crate::shared::error::Result;
use crate::shared::utils::{bytes_to_hex, keccak256};

/// Key manager for Ethereum key operations
pub struct KeyManager {
    secp256k1: Secp256k1<secp256k1::All>,
}

impl KeyManager {
    /// Create a new key manager
    pub fn new() -> Self {
        Self {
            secp256k1: Secp256k1::new(),
        }
    }

    /// Derive the Ethereum keypair at `m/44'/60'/0'/0/0` from a BIP-39 seed
    pub fn derive_from_seed(&self, seed: &[u8; 64]) -> Result<EthKeys> {
        let xprv = XPrv::new(seed)?;

        let derivation_path = DerivationPath::from_str(ETHEREUM_DERIVATION_PATH)?;

        let mut child_xprv = xprv;
        for child_number in derivation_path.into_iter() {
            child_xprv = child_xprv.derive_child(child_number)?;
        }

        let mut key_bytes = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        key_bytes.copy_from_slice(&child_xprv.private_key().to_bytes());

        let secret_key = SecretKey::from_byte_array(*key_bytes)?;
        Ok(self.keys_from_secret(&secret_key))
    }

    /// Generate a random Ethereum keypair
    pub fn generate(&self) -> Result<EthKeys> {
        let mut key_bytes = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        // Out-of-range scalars are astronomically rare; draw again if one shows up
        loop {
            OsRng.fill_bytes(&mut *key_bytes);
            if let Ok(secret_key) = SecretKey::from_byte_array(*key_bytes) {
                return Ok(self.keys_from_secret(&secret_key));
            }
        }
    }

    fn keys_from_secret(&self, secret_key: &SecretKey) -> EthKeys {
        let public_key = PublicKey::from_secret_key(&self.secp256k1, secret_key);
        let public_key_bytes = public_key.serialize_uncompressed();

        // Address is the last 20 bytes of keccak(pubkey without the 0x04 tag)
        let keccak_hash = keccak256(&public_key_bytes[1..]);
        let address = Address::from_slice(&keccak_hash[12..]);

        let private_key = Zeroizing::new(secret_key.secret_bytes());

        EthKeys {
            address: to_checksum(&address, None),
            public_key: bytes_to_hex(&public_key_bytes),
            private_key: bytes_to_hex(&*private_key),
        }
    }
}

impl Default for KeyManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crypto::keys::SecureSeedPhrase;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn test_seed() -> Zeroizing<[u8; 64]> {
        SecureSeedPhrase::parse(TEST_MNEMONIC)
            .expect("Failed to parse test mnemonic")
            .to_seed()
    }

    #[test]
    fn test_known_address_vector() {
        let manager = KeyManager::new();
        let keys = manager.derive_from_seed(&test_seed())
            .expect("Failed to derive Ethereum keys");
        assert_eq!(keys.address, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
    }

    #[test]
    fn test_key_formats() {
        let manager = KeyManager::new();
        let keys = manager.derive_from_seed(&test_seed())
            .expect("Failed to derive Ethereum keys");

        assert!(keys.address.starts_with("0x"));
        assert_eq!(keys.address.len(), 42);
        assert!(keys.public_key.starts_with("0x04"));
        assert_eq!(keys.public_key.len(), 132); // 0x + 65 bytes * 2
        assert!(keys.private_key.starts_with("0x"));
        assert_eq!(keys.private_key.len(), 66);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let manager = KeyManager::new();
        let first = manager.derive_from_seed(&test_seed()).expect("Failed to derive keys");
        let second = manager.derive_from_seed(&test_seed()).expect("Failed to derive keys");
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_generation() {
        let manager = KeyManager::new();
        let a = manager.generate().expect("Failed to generate keys");
        let b = manager.generate().expect("Failed to generate keys");

        assert_ne!(a.private_key, b.private_key);
        assert_ne!(a.address, b.address);
        assert_eq!(a.address.len(), 42);
    }
}
