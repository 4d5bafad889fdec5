//! Domain repositories
//!
//! This module contains repository traits for data access
//! following Domain-Driven Design principles.

pub mod secret_repository;

// Re-export repositories
pub use secret_repository::*;
