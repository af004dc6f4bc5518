//! Configuration constants.
//!
//! This module defines the constants used as defaults throughout the application.

/// WhoisXML API lookup endpoint.
///
/// Overridable via `--endpoint` or `WHOIS_API_ENDPOINT` (tests point it at a
/// local mock server).
pub const WHOIS_API_ENDPOINT: &str = "https://www.whoisxmlapi.com/whoisserver/WhoisService";

/// Environment variable holding the WhoisXML API key.
pub const API_KEY_ENV: &str = "WHOISXML_API_KEY";

/// Environment variable overriding the lookup endpoint.
pub const ENDPOINT_ENV: &str = "WHOIS_API_ENDPOINT";

/// HTTP timeout for the WHOIS request in seconds.
/// WhoisXML may query the registry live when `preferFresh` is set, which can
/// take well over the usual sub-second response time.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent with the WHOIS request.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Fixed request parameters
/// Response format requested from the lookup service
pub const WHOIS_OUTPUT_FORMAT: &str = "JSON";
/// 0 = plain WHOIS, no RDAP
pub const WHOIS_RDAP: u8 = 0;
/// 1 = ask the service to bypass its own cache
pub const WHOIS_PREFER_FRESH: u8 = 1;
