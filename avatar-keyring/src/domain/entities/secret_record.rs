//! Secret record entity and related value objects
//!
//! The secret record is the unit persisted to the secret file: the opaque
//! identity key bag, the mnemonic it was derived from, the Stellar keypair with
//! its rotation history, and the Ethereum keypair.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::shared::constants::IDENTITY_ID_FIELD;

/// A Stellar keypair in StrKey encoding (`G...` / `S...`)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarKeyPair {
    pub public_key: String,
    pub secret_key: String,
}

impl StellarKeyPair {
    pub fn new(public_key: String, secret_key: String) -> Self {
        Self { public_key, secret_key }
    }
}

impl fmt::Debug for StellarKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StellarKeyPair")
            .field("public_key", &self.public_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Stellar section of the record: the current keypair plus retired ones,
/// most recently retired first
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarKeys {
    pub public_key: String,
    pub secret_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<Vec<StellarKeyPair>>,
}

impl StellarKeys {
    /// A Stellar section without history
    pub fn from_pair(pair: StellarKeyPair) -> Self {
        Self {
            public_key: pair.public_key,
            secret_key: pair.secret_key,
            old: None,
        }
    }

    /// The current keypair
    pub fn current(&self) -> StellarKeyPair {
        StellarKeyPair::new(self.public_key.clone(), self.secret_key.clone())
    }

    /// Retired keypairs, most recent first
    pub fn history(&self) -> &[StellarKeyPair] {
        self.old.as_deref().unwrap_or(&[])
    }
}

impl fmt::Debug for StellarKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StellarKeys")
            .field("public_key", &self.public_key)
            .field("secret_key", &"[REDACTED]")
            .field("old", &self.history().len())
            .finish()
    }
}

/// Ethereum section of the record
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthKeys {
    pub address: String,
    pub public_key: String,
    pub private_key: String,
}

impl fmt::Debug for EthKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EthKeys")
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// The complete set of derived key material, as persisted to the secret file.
///
/// Identity keys are an opaque bag flattened into the top level of the JSON
/// document. Any top-level field this type does not name lands in that bag
/// and is written back untouched, in its original position.
///
/// No `Debug` output ever contains secret material.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SecretRecord {
    #[serde(flatten)]
    pub identity: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stellar: Option<StellarKeys>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eth: Option<EthKeys>,
}

impl SecretRecord {
    /// Public name of the record owner, taken from the identity bag
    pub fn id(&self) -> Option<&str> {
        self.identity.get(IDENTITY_ID_FIELD).and_then(Value::as_str)
    }

    /// Keys that are safe to print or share
    pub fn public_summary(&self) -> PublicKeys {
        PublicKeys {
            id: self.id().map(str::to_string),
            identity_public_key: self
                .identity
                .get("public")
                .and_then(Value::as_str)
                .map(str::to_string),
            stellar_public_key: self.stellar.as_ref().map(|s| s.public_key.clone()),
            retired_stellar_public_keys: self
                .stellar
                .as_ref()
                .map(|s| s.history().iter().map(|p| p.public_key.clone()).collect())
                .unwrap_or_default(),
            eth_address: self.eth.as_ref().map(|e| e.address.clone()),
            eth_public_key: self.eth.as_ref().map(|e| e.public_key.clone()),
        }
    }
}

impl fmt::Debug for SecretRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretRecord")
            .field("id", &self.id())
            .field("identity_fields", &self.identity.keys().collect::<Vec<_>>())
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "[REDACTED]"))
            .field("stellar", &self.stellar)
            .field("eth", &self.eth)
            .finish()
    }
}

/// Public view of a secret record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeys {
    pub id: Option<String>,
    pub identity_public_key: Option<String>,
    pub stellar_public_key: Option<String>,
    pub retired_stellar_public_keys: Vec<String>,
    pub eth_address: Option<String>,
    pub eth_public_key: Option<String>,
}
