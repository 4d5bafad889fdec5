//! Constants for the keyring
//!
//! This module contains all constants used throughout the keyring.

// Secret file layout
pub const SECRET_FILE_NAME: &str = "secret";
pub const APP_DIR_NAME: &str = "avatar";

/// Banner written above the JSON document. The first line is reproduced
/// byte-for-byte from existing secret files, stray `",` included.
pub const SECRET_FILE_BANNER: &str = "# These are your SECRET keys.\",
#
# Any one who has access to these keys has access to
# your avatar and wallets and can use it to steal from
# you and destroy your identity.
#
# NEVER show this to anyone!!!";

pub const SECRET_FILE_FOOTER: &str = "# WARNING! It's vital that you DO NOT edit OR share your SECRET keys.
# You can safely share your public name or any of the other public keys.";

pub const PUBLIC_NAME_PREFIX: &str = "# your public name: ";

// File permissions
pub const MODE_OWNER_READ_WRITE: u32 = 0o600;
pub const MODE_OWNER_READ_ONLY: u32 = 0o400;

// Environment variables
pub const ENV_SECRET_FILE: &str = "AVATAR_SECRET_FILE";
pub const ENV_AVATAR_HOME: &str = "AVATAR_HOME";

// Mnemonic constants
pub const MNEMONIC_ENTROPY_SIZE: usize = 32; // 24 words

// Key sizes
pub const PRIVATE_KEY_SIZE: usize = 32;
pub const ED25519_SEED_SIZE: usize = 32;

// Derivation paths
pub const ETHEREUM_DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";
/// SEP-0005: m/44'/148'/{account}'
pub const STELLAR_PURPOSE: u32 = 44;
pub const STELLAR_COIN_TYPE: u32 = 148;
pub const STELLAR_ACCOUNT_INDEX: u32 = 0;

// Identity key bag
pub const IDENTITY_CURVE: &str = "ed25519";
pub const IDENTITY_KEY_SUFFIX: &str = ".ed25519";
pub const IDENTITY_ID_FIELD: &str = "id";
