//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, timeouts, environment variable names)
//! - The library `Config` struct
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, Language, LogFormat, LogLevel, Opt, OutputFormat};
