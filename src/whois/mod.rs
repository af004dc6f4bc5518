//! WHOIS domain lookup through the WhoisXML API.
//!
//! One POST per lookup, no caching and no retries. A non-200 status is
//! returned as `WhoisLookup::HttpFailure`; transport and JSON decode failures
//! are returned as `WhoisError`.

mod parse;
mod types;

use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::StatusCode;

use crate::config::{Config, WHOIS_OUTPUT_FORMAT, WHOIS_PREFER_FRESH, WHOIS_RDAP};
use crate::error_handling::{InitializationError, WhoisError};
use crate::initialization::init_client;

pub use types::{WhoisLookup, WhoisReport};
use types::WhoisRequest;

/// Client for the WhoisXML lookup endpoint.
///
/// Holds the API key so callers only pass the domain.
#[derive(Clone)]
pub struct WhoisClient {
    http: Arc<reqwest::Client>,
    endpoint: String,
    api_key: String,
}

impl WhoisClient {
    /// Creates a client from an existing HTTP client.
    pub fn new(
        http: Arc<reqwest::Client>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Creates a client with the endpoint, key, timeout and User-Agent from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let http = init_client(config)?;
        Ok(Self::new(http, config.endpoint.clone(), config.api_key.clone()))
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Performs a WHOIS lookup for `domain`.
    ///
    /// # Returns
    ///
    /// - `WhoisLookup::Found` for HTTP 200 with a JSON body
    /// - `WhoisLookup::HttpFailure` for any other status, carrying the raw body
    ///
    /// # Errors
    ///
    /// - `WhoisError::Transport` if the request fails or the body cannot be read
    ///   (including the configured timeout elapsing)
    /// - `WhoisError::Decode` if a 200 body cannot be decoded
    pub async fn lookup(&self, domain: &str) -> Result<WhoisLookup, WhoisError> {
        let request = WhoisRequest {
            api_key: &self.api_key,
            domain_name: domain,
            output_format: WHOIS_OUTPUT_FORMAT,
            rdap: WHOIS_RDAP,
            prefer_fresh: WHOIS_PREFER_FRESH,
        };

        info!("Starting WHOIS lookup for domain: {}", domain);

        let response = self
            .http
            .post(self.endpoint.as_str())
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            warn!(
                "WHOIS lookup for {} returned HTTP {}",
                domain,
                status.as_u16()
            );
            return Ok(WhoisLookup::HttpFailure {
                status: status.as_u16(),
                body,
            });
        }

        debug!("WHOIS response for {}: {} bytes", domain, body.len());
        let parsed = parse::parse_response(&body)?;

        if let Some(message) = &parsed.error_message {
            warn!(
                "WHOIS service reported an error for {}: {} {}",
                domain,
                message.error_code.as_deref().unwrap_or("-"),
                message.msg.as_deref().unwrap_or("")
            );
        }

        let report = parsed.into_report();
        info!(
            "WHOIS lookup successful for {} (organization {})",
            domain,
            if report.has_organization() {
                "present"
            } else {
                "absent"
            }
        );
        Ok(WhoisLookup::Found(report))
    }
}
