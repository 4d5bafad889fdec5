//! Core keyring functionality
//!
//! This module contains key derivation, rotation, secret file storage and the
//! manager that ties them to a configured secret file.

pub mod crypto;
pub mod derivation;
pub mod rotation;
pub mod storage;
pub mod manager;
