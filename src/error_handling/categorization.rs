//! Error categorization.

use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Status-derived errors never reach this function (the WHOIS client reads the
/// status itself instead of calling `error_for_status`), so only the
/// transport-level error kinds are inspected.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}
