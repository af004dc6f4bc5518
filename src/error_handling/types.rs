//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use super::categorization::categorize_reqwest_error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures of a WHOIS lookup that leave no response to interpret.
#[derive(Error, Debug)]
pub enum WhoisError {
    /// The request could not be sent or the response body could not be read.
    #[error("WHOIS request failed ({}): {source}", categorize_reqwest_error(.source))]
    Transport {
        /// Underlying HTTP error
        #[from]
        source: ReqwestError,
    },

    /// The service answered 200 but the body is not the expected JSON.
    #[error("WHOIS response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl WhoisError {
    /// Returns the category of this failure.
    pub fn error_type(&self) -> ErrorType {
        match self {
            WhoisError::Transport { source } => categorize_reqwest_error(source),
            WhoisError::Decode(_) => ErrorType::WhoisResponseDecodeError,
        }
    }
}

/// Categories of lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Request could not be built (e.g. malformed endpoint)
    HttpRequestBuilderError,
    /// Redirect policy violation
    HttpRequestRedirectError,
    /// Configured timeout elapsed
    HttpRequestTimeoutError,
    /// Connection could not be established
    HttpRequestConnectError,
    /// Request failed while being sent
    HttpRequestRequestError,
    /// Request or response body error
    HttpRequestBodyError,
    /// Response body could not be decoded as text
    HttpRequestDecodeError,
    /// Any other transport failure
    HttpRequestOtherError,
    /// 200 response whose body could not be decoded
    WhoisResponseDecodeError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::WhoisResponseDecodeError => "WHOIS response decode error",
        }
    }
}
