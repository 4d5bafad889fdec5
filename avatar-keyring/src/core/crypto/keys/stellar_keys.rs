//! Stellar key derivation and parsing
//!
//! Stellar accounts are derived per SEP-0005: SLIP-0010 ed25519 derivation
//! from the BIP-39 seed along `m/44'/148'/{account}'`. Only hardened indices
//! exist on this curve.
//!
//! ```text
//! master        = HMAC-SHA512(key = "ed25519 seed", data = seed)
//! child(i)      = HMAC-SHA512(key = chain_code, data = 0x00 || key || ser32(i | 0x80000000))
//! key, chain    = I[0..32], I[32..64]
//! ```
//!
//! Keys are encoded as StrKeys: `G...` for the account id, `S...` for the
//! secret seed.

use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use stellar_strkey::ed25519::{PrivateKey, PublicKey};
use zeroize::{Zeroize, Zeroizing};

use crate::domain::entities::StellarKeyPair;
use crate::shared::constants::{ED25519_SEED_SIZE, STELLAR_COIN_TYPE, STELLAR_PURPOSE};
use crate::shared::error::{Result, SecretError};

type HmacSha512 = Hmac<Sha512>;

const HARDENED_OFFSET: u32 = 0x8000_0000;

const MASTER_HMAC_KEY: &[u8] = b"ed25519 seed";

/// Derive the Stellar keypair for `account` from a 64-byte BIP-39 seed
pub fn derive_stellar_keypair(seed: &[u8; 64], account: u32) -> Result<StellarKeyPair> {
    let (mut key, mut chain_code) = master_key_from_seed(seed)?;

    for index in [STELLAR_PURPOSE, STELLAR_COIN_TYPE, account] {
        let (child_key, child_chain) = derive_hardened_child(&key, &chain_code, index)?;
        key.zeroize();
        chain_code.zeroize();
        key = child_key;
        chain_code = child_chain;
    }

    let keypair = keypair_from_seed(&key);

    key.zeroize();
    chain_code.zeroize();

    Ok(keypair)
}

/// Parse a StrKey secret seed (`S...`) and rebuild its keypair.
///
/// Anything that is not a well-formed secret seed is rejected, including
/// account ids (`G...`) and seeds padded with whitespace. The offered string
/// is never echoed in the error.
pub fn parse_stellar_secret(secret: &str) -> Result<StellarKeyPair> {
    let private_key = PrivateKey::from_string(secret)
        .map_err(|e| SecretError::invalid_stellar_secret(format!("not a Stellar secret seed ({})", e)))?;
    let seed = Zeroizing::new(private_key.0);
    Ok(keypair_from_seed(&seed))
}

fn keypair_from_seed(seed: &[u8; ED25519_SEED_SIZE]) -> StellarKeyPair {
    let signing_key = SigningKey::from_bytes(seed);
    let public_key = PublicKey(signing_key.verifying_key().to_bytes());
    let secret_key = PrivateKey(*seed);

    StellarKeyPair::new(public_key.to_string(), secret_key.to_string())
}

fn master_key_from_seed(seed: &[u8]) -> Result<([u8; 32], [u8; 32])> {
    let mut i = hmac_sha512(MASTER_HMAC_KEY, seed)?;

    let mut key = [0u8; 32];
    let mut chain_code = [0u8; 32];
    key.copy_from_slice(&i[..32]);
    chain_code.copy_from_slice(&i[32..]);
    i.zeroize();

    Ok((key, chain_code))
}

fn derive_hardened_child(
    parent_key: &[u8; 32],
    parent_chain_code: &[u8; 32],
    index: u32,
) -> Result<([u8; 32], [u8; 32])> {
    // 0x00 || parent_key || ser32(index)
    let mut data = [0u8; 37];
    data[1..33].copy_from_slice(parent_key);
    data[33..37].copy_from_slice(&(index | HARDENED_OFFSET).to_be_bytes());

    let mut i = hmac_sha512(parent_chain_code, &data)?;
    data.zeroize();

    let mut child_key = [0u8; 32];
    let mut child_chain = [0u8; 32];
    child_key.copy_from_slice(&i[..32]);
    child_chain.copy_from_slice(&i[32..]);
    i.zeroize();

    Ok((child_key, child_chain))
}

fn hmac_sha512(key: &[u8], data: &[u8]) -> Result<[u8; 64]> {
    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|e| SecretError::crypto(format!("HMAC-SHA512 key init failed: {}", e)))?;
    mac.update(data);
    let result = mac.finalize().into_bytes();

    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    Ok(output)
}
