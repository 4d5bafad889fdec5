//! Secret repository for record persistence
//!
//! The derivation and rotation operators only ever reach storage through this
//! trait; the file-backed implementation lives in `core::storage`.

use crate::domain::entities::SecretRecord;
use crate::shared::error::Result;
use async_trait::async_trait;

/// Secret repository trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SecretRepository: Send + Sync {
    /// Load and decode the persisted record
    async fn load(&self) -> Result<SecretRecord>;

    /// Replace the persisted record with `record`
    async fn write(&self, record: &SecretRecord) -> Result<()>;
}
