//! Infrastructure layer - platform-specific implementations
//!
//! This module contains the platform file handling and the configuration that
//! locates the secret file.

pub mod platform;
pub mod config;

// Re-export infrastructure components
pub use platform::*;
pub use config::*;
