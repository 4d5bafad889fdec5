//! Domain layer - entities and repositories
//!
//! This module contains the domain model of the keyring: the secret record and
//! the repository trait through which it is persisted.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;
