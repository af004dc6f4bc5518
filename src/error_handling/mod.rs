//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization and WHOIS lookup failures)
//! - Categorization of transport errors into `ErrorType` for reporting
//!
//! A non-200 HTTP status is not an error here: it is a lookup outcome the
//! caller reports and treats as an untrusted domain. Only failures that leave
//! no response to interpret (transport, JSON decode) become `WhoisError`.

mod categorization;
mod types;

// Re-export public API
pub use types::{ErrorType, InitializationError, WhoisError};
