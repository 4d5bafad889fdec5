//! Cryptographic functionality for the keyring
//!
//! Key material providers only: every primitive (BIP-39, BIP-32, SLIP-0010,
//! secp256k1, ed25519, StrKey) comes from its standard crate.
//!
//! SECURITY: intermediate seeds and private scalars are held in
//! `Zeroizing` buffers and cleared as soon as the encoded keys are produced.

pub mod keys;

// Re-export all public items from submodules
pub use keys::*;
