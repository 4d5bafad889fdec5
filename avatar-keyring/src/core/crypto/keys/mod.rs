//! Key material providers
//!
//! This module handles mnemonic validation and generation, and the derivation
//! of the identity, Stellar and Ethereum keys a secret record is made of.

pub mod secure_seed_phrase;
pub mod key_manager;
pub mod stellar_keys;
pub mod identity;

// Re-export all public items from submodules
pub use secure_seed_phrase::*;
pub use key_manager::*;
pub use stellar_keys::*;
pub use identity::*;
