//! WHOIS data structures.

use serde::Serialize;

/// Registration details resolved from a WhoisXML API response.
///
/// Every field is independently optional; nothing enforces consistency between
/// them. `name_servers` is empty rather than absent when nothing was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WhoisReport {
    /// Registrant organization
    pub organization: Option<String>,
    /// Registrant country
    pub country: Option<String>,
    /// Domain creation date, as reported by the service
    pub created_date: Option<String>,
    /// Last update date
    pub updated_date: Option<String>,
    /// Expiration date
    pub expires_date: Option<String>,
    /// Domain status (e.g. "clientTransferProhibited")
    pub status: Option<String>,
    /// Nameservers in the order the service listed them
    pub name_servers: Vec<String>,
    /// Estimated domain age in days
    pub estimated_domain_age: Option<i64>,
    /// Raw WHOIS text
    pub raw_text: Option<String>,
}

impl WhoisReport {
    /// True when a registrant organization was found.
    ///
    /// This is the whole trust signal: no other field affects it.
    pub fn has_organization(&self) -> bool {
        self.organization.as_deref().is_some_and(|org| !org.is_empty())
    }
}

/// Outcome of a single WHOIS request that produced a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhoisLookup {
    /// HTTP 200 with a decodable body
    Found(WhoisReport),
    /// Any other HTTP status, with the raw response body
    HttpFailure {
        /// HTTP status code
        status: u16,
        /// Response body as text
        body: String,
    },
}

impl WhoisLookup {
    /// True only for a found record that names an organization.
    pub fn is_trusted(&self) -> bool {
        match self {
            WhoisLookup::Found(report) => report.has_organization(),
            WhoisLookup::HttpFailure { .. } => false,
        }
    }
}

/// Request body sent to the lookup endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WhoisRequest<'a> {
    pub(crate) api_key: &'a str,
    pub(crate) domain_name: &'a str,
    pub(crate) output_format: &'static str,
    pub(crate) rdap: u8,
    pub(crate) prefer_fresh: u8,
}
