use bip39::{Language, Mnemonic};
use rand_core::{OsRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::shared::constants::MNEMONIC_ENTROPY_SIZE;
use crate::shared::error::{Result, SecretError};

/// Validated BIP-39 seed phrase.
///
/// Construction always goes through BIP-39 checksum and word-list validation,
/// so holding a `SecureSeedPhrase` means the phrase is usable as a seed. The
/// phrase is zeroized on drop and never printed by `Debug`.
pub struct SecureSeedPhrase {
    phrase: String,
    mnemonic: Mnemonic,
}

impl SecureSeedPhrase {
    /// Generate a new 24-word phrase from OS entropy
    pub fn generate() -> Result<Self> {
        let mut entropy = Zeroizing::new([0u8; MNEMONIC_ENTROPY_SIZE]);
        OsRng.fill_bytes(&mut *entropy);
        let mnemonic = Mnemonic::from_entropy_in(Language::English, &*entropy)
            .map_err(|e| SecretError::crypto(format!("Failed to encode entropy as mnemonic: {}", e)))?;
        Ok(Self {
            phrase: mnemonic.to_string(),
            mnemonic,
        })
    }

    /// Validate a caller-supplied phrase. The phrase is kept exactly as given.
    pub fn parse(phrase: &str) -> Result<Self> {
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, phrase)
            .map_err(|e| SecretError::invalid_mnemonic(e.to_string()))?;
        Ok(Self {
            phrase: phrase.to_string(),
            mnemonic,
        })
    }

    /// Get the seed phrase as a &str
    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    /// Number of words in the phrase
    pub fn word_count(&self) -> usize {
        self.mnemonic.word_count()
    }

    /// BIP-39 seed with an empty passphrase
    pub fn to_seed(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(self.mnemonic.to_seed_normalized(""))
    }

    /// Raw entropy encoded by the phrase
    pub fn to_entropy(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.mnemonic.to_entropy())
    }
}

impl std::fmt::Debug for SecureSeedPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureSeedPhrase")
            .field("words", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl Drop for SecureSeedPhrase {
    fn drop(&mut self) {
        // Clear the seed phrase when dropped
        self.phrase.zeroize();
    }
}
