//! Error handling for the keyring
//!
//! This module defines the error types used throughout the keyring.

use thiserror::Error;

/// Keyring error type
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Invalid Stellar secret key: {0}")]
    InvalidStellarSecret(String),

    #[error("Failed to read secret file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to parse secret file: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to write secret file: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to serialize secret record: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SecretError>;

impl SecretError {
    /// Create an invalid mnemonic error
    pub fn invalid_mnemonic(message: impl Into<String>) -> Self {
        Self::InvalidMnemonic(message.into())
    }

    /// Create an invalid Stellar secret error
    pub fn invalid_stellar_secret(message: impl Into<String>) -> Self {
        Self::InvalidStellarSecret(message.into())
    }

    /// Create a cryptographic error
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Stable numeric code for this error kind, used across the C ABI
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidMnemonic(_) => 1,
            Self::InvalidStellarSecret(_) => 2,
            Self::Read(_) => 3,
            Self::Parse(_) => 4,
            Self::Write(_) => 5,
            Self::Serialization(_) => 6,
            Self::Crypto(_) => 7,
            Self::Config(_) => 8,
        }
    }

    /// True when the secret file does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<bip32::Error> for SecretError {
    fn from(err: bip32::Error) -> Self {
        Self::crypto(format!("BIP32 derivation error: {}", err))
    }
}

impl From<secp256k1::Error> for SecretError {
    fn from(err: secp256k1::Error) -> Self {
        Self::crypto(format!("Secp256k1 error: {}", err))
    }
}
