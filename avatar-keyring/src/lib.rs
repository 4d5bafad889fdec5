//! Avatar Keyring
//!
//! Deterministic identity, Stellar and Ethereum keys derived from a single
//! BIP-39 mnemonic, persisted to one permission-restricted secret file.
//!
//! ## Architecture
//!
//! - **Core**: key derivation, Stellar key rotation, secret file storage and
//!   the [`SecretManager`] facade
//! - **Domain**: the secret record and the repository trait it is stored through
//! - **Infrastructure**: platform file permissions and configuration
//! - **Shared**: errors, constants and utilities
//!
//! ## Security Features
//!
//! - The secret file is written owner-only and left read-only (0400 on Unix)
//! - Mnemonics and intermediate seeds are zeroized after use
//! - `Debug` output never contains key material
//!
//! ## Usage
//!
//! ```no_run
//! use avatar_keyring::SecretManager;
//!
//! # async fn demo() -> avatar_keyring::Result<()> {
//! let manager = SecretManager::from_env()?;
//!
//! // Create a new mnemonic and derive every key from it
//! let record = manager.create().await?;
//! println!("public name: {}", record.id().unwrap_or_default());
//!
//! // Later: rotate the Stellar key, keeping the old one in history
//! # let new_secret = "SBGWSG6BTNCKCOB3DIFBGCVMUPQFYPA2G4O34RMTB343OYPXU5DJDVMN";
//! manager.update_wallet_key(new_secret).await?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domain;
pub mod shared;
pub mod infrastructure;

// Re-export specific components
pub use crate::core::crypto::keys::{Ed25519Identity, IdentityDerivation, KeyManager, SecureSeedPhrase};
pub use crate::core::derivation::Deriver;
pub use crate::core::manager::SecretManager;
pub use crate::core::storage::FileSecretStore;
pub use crate::infrastructure::config::SecretConfig;

// Re-export domain entities
pub use crate::domain::{EthKeys, PublicKeys, SecretRecord, SecretRepository, StellarKeyPair, StellarKeys};

// Re-export shared types
pub use crate::shared::error::{Result, SecretError};

/// Initialize logging (`RUST_LOG` controls the level). Safe to call more than once.
pub fn init() {
    let _ = env_logger::try_init();
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

// Feature flags
#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export FFI functions when feature is enabled
#[cfg(feature = "ffi")]
pub use ffi::*;
