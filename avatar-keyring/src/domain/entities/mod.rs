//! Domain entities and value objects
//!
//! This module contains the core domain entities and value objects
//! that represent the business concepts in the keyring.

pub mod secret_record;

// Re-export entities
pub use secret_record::*;
