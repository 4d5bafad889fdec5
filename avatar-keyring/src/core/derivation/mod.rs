//! Secret record derivation
//!
//! Turns a BIP-39 mnemonic into a complete secret record (identity keys, a
//! SEP-0005 Stellar keypair and a BIP-44 Ethereum keypair) and hands it to the
//! repository as the final step.

use crate::core::crypto::keys::{
    derive_stellar_keypair, Ed25519Identity, IdentityDerivation, KeyManager, SecureSeedPhrase,
};
use crate::domain::{SecretRecord, SecretRepository, StellarKeys};
use crate::shared::constants::STELLAR_ACCOUNT_INDEX;
use crate::shared::error::Result;

/// Derivation orchestrator
pub struct Deriver {
    identity: Box<dyn IdentityDerivation>,
    key_manager: KeyManager,
}

impl Deriver {
    pub fn new() -> Self {
        Self::with_identity(Box::new(Ed25519Identity))
    }

    /// Use a custom identity key provider
    pub fn with_identity(identity: Box<dyn IdentityDerivation>) -> Self {
        Self {
            identity,
            key_manager: KeyManager::new(),
        }
    }

    /// Derive every key from `phrase` without persisting anything
    pub fn derive_record(&self, phrase: &SecureSeedPhrase) -> Result<SecretRecord> {
        let identity = self.identity.derive(phrase)?;

        let seed = phrase.to_seed();
        let stellar = derive_stellar_keypair(&seed, STELLAR_ACCOUNT_INDEX)?;
        let eth = self.key_manager.derive_from_seed(&seed)?;

        Ok(SecretRecord {
            identity,
            mnemonic: Some(phrase.as_str().to_string()),
            stellar: Some(StellarKeys::from_pair(stellar)),
            eth: Some(eth),
        })
    }

    /// Validate `words`, derive the record and persist it
    pub async fn derive_from_mnemonic(
        &self,
        words: &str,
        repository: &dyn SecretRepository,
    ) -> Result<SecretRecord> {
        let phrase = SecureSeedPhrase::parse(words)?;
        let record = self.derive_record(&phrase)?;
        repository.write(&record).await?;
        Ok(record)
    }

    /// Generate a fresh 24-word mnemonic, derive the record and persist it
    pub async fn create_fresh(&self, repository: &dyn SecretRepository) -> Result<SecretRecord> {
        let phrase = SecureSeedPhrase::generate()?;
        let record = self.derive_record(&phrase)?;
        repository.write(&record).await?;
        Ok(record)
    }
}

impl Default for Deriver {
    fn default() -> Self {
        Self::new()
    }
}
