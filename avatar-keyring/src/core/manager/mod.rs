//! Secret manager
//!
//! The externally exposed operations, bound to one configured secret file.
//! Callers must not run two operations against the same file concurrently:
//! rotation is a load followed by a write with no locking in between.

use crate::core::crypto::keys::{IdentityDerivation, KeyManager};
use crate::core::derivation::Deriver;
use crate::core::rotation;
use crate::core::storage::FileSecretStore;
use crate::domain::{PublicKeys, SecretRecord, SecretRepository};
use crate::infrastructure::config::SecretConfig;
use crate::shared::error::Result;
use std::path::Path;

/// Secret manager bound to a secret file
pub struct SecretManager {
    store: FileSecretStore,
    deriver: Deriver,
    key_manager: KeyManager,
}

impl SecretManager {
    pub fn new(config: SecretConfig) -> Self {
        Self {
            store: FileSecretStore::new(config.secret_file()),
            deriver: Deriver::new(),
            key_manager: KeyManager::new(),
        }
    }

    /// Manager for the secret file resolved from the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(SecretConfig::from_env()?))
    }

    /// Replace the identity key provider
    pub fn with_identity(mut self, identity: Box<dyn IdentityDerivation>) -> Self {
        self.deriver = Deriver::with_identity(identity);
        self
    }

    pub fn secret_file(&self) -> &Path {
        self.store.path()
    }

    /// Generate a fresh mnemonic, derive every key and persist the record
    pub async fn create(&self) -> Result<SecretRecord> {
        log::info!("Creating new secret keys in {}", self.secret_file().display());
        let record = self.deriver.create_fresh(&self.store).await?;
        log::info!("Secret keys created for {}", record.id().unwrap_or("<no id>"));
        Ok(record)
    }

    /// Derive every key from `words` and persist the record
    pub async fn from_mnemonic(&self, words: &str) -> Result<SecretRecord> {
        log::info!("Restoring secret keys from mnemonic into {}", self.secret_file().display());
        let record = self.deriver.derive_from_mnemonic(words, &self.store).await?;
        log::info!("Secret keys restored for {}", record.id().unwrap_or("<no id>"));
        Ok(record)
    }

    /// Rotate the Stellar key to `stellar_secret`, retiring the current one
    pub async fn update_wallet_key(&self, stellar_secret: &str) -> Result<SecretRecord> {
        log::info!("Rotating Stellar key in {}", self.secret_file().display());
        let record = rotation::rotate(stellar_secret, &self.store, &self.key_manager).await?;
        if let Some(stellar) = &record.stellar {
            log::info!(
                "Stellar key rotated to {} ({} retired)",
                stellar.public_key,
                stellar.history().len()
            );
        }
        Ok(record)
    }

    /// The persisted record
    pub async fn load_secret_data(&self) -> Result<SecretRecord> {
        self.store.load().await
    }

    /// Shareable public keys of the persisted record
    pub async fn public_keys(&self) -> Result<PublicKeys> {
        Ok(self.load_secret_data().await?.public_summary())
    }
}
