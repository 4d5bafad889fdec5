//! Shared utilities, constants and errors
//!
//! This module contains common utilities, constants and the error type used
//! throughout the keyring.

pub mod utils;
pub mod constants;
pub mod error;

// Re-export shared components
pub use utils::*;
pub use constants::*;
pub use error::*;
