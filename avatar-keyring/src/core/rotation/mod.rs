//! Stellar key rotation
//!
//! Replaces the current Stellar keypair with a caller supplied secret while
//! retiring the previous pair into the history list. Records predating the
//! Ethereum section get a freshly generated Ethereum keypair on their first
//! rotation.

use crate::core::crypto::keys::{parse_stellar_secret, KeyManager};
use crate::domain::{SecretRecord, SecretRepository, StellarKeyPair, StellarKeys};
use crate::shared::error::Result;

/// Rotate `record` in memory to `new_pair`, backfilling `eth` if missing
pub fn apply_rotation(
    record: &mut SecretRecord,
    new_pair: StellarKeyPair,
    key_manager: &KeyManager,
) -> Result<()> {
    if record.eth.is_none() {
        log::info!("Secret record has no Ethereum keys, generating a new keypair");
        record.eth = Some(key_manager.generate()?);
    }

    record.stellar = Some(match record.stellar.take() {
        Some(previous) => {
            let mut old = Vec::with_capacity(previous.history().len() + 1);
            old.push(previous.current());
            old.extend(previous.old.unwrap_or_default());
            StellarKeys {
                public_key: new_pair.public_key,
                secret_key: new_pair.secret_key,
                old: Some(old),
            }
        }
        None => StellarKeys::from_pair(new_pair),
    });
    Ok(())
}

/// Validate `stellar_secret`, rotate the stored record and persist it
pub async fn rotate(
    stellar_secret: &str,
    repository: &dyn SecretRepository,
    key_manager: &KeyManager,
) -> Result<SecretRecord> {
    let new_pair = parse_stellar_secret(stellar_secret)?;

    let mut record = repository.load().await?;
    apply_rotation(&mut record, new_pair, key_manager)?;
    repository.write(&record).await?;
    Ok(record)
}
