//! WhoisXML API response decoding and field resolution.
//!
//! The service reports most fields twice: once on the top-level `WhoisRecord`
//! and once on the nested `registryData`. Each report field is resolved from an
//! ordered list of candidate locations, taking the first one present.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::types::WhoisReport;

/// Top-level response body.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct WhoisApiResponse {
    #[serde(rename = "WhoisRecord", default, deserialize_with = "lenient_object")]
    pub(crate) whois_record: Option<WhoisRecord>,
    #[serde(rename = "ErrorMessage", default, deserialize_with = "lenient_object")]
    pub(crate) error_message: Option<ServiceErrorMessage>,
}

/// Error payload the service sends (with HTTP 200) for bad keys, exhausted
/// credits and the like.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServiceErrorMessage {
    #[serde(rename = "errorCode", default, deserialize_with = "lenient_text")]
    pub(crate) error_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub(crate) msg: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WhoisRecord {
    #[serde(default, deserialize_with = "lenient_object")]
    registrant: Option<Contact>,
    #[serde(default, deserialize_with = "lenient_text")]
    created_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    updated_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    expires_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    status: Option<String>,
    #[serde(default, deserialize_with = "lenient_days")]
    estimated_domain_age: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    raw_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    registry_data: Option<RegistryData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistryData {
    #[serde(default, deserialize_with = "lenient_object")]
    registrant: Option<Contact>,
    #[serde(default, deserialize_with = "lenient_text")]
    created_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    updated_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    expires_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    status: Option<String>,
    #[serde(default)]
    name_servers: Option<NameServersField>,
    #[serde(default, deserialize_with = "lenient_text")]
    raw_text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Contact {
    #[serde(default, deserialize_with = "lenient_text")]
    organization: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    country: Option<String>,
}

/// `registryData.nameServers` comes either as `{"hostNames": [...]}` or as a
/// bare list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NameServersField {
    List(Vec<String>),
    Hosts {
        #[serde(rename = "hostNames", default)]
        host_names: Vec<String>,
    },
    Other(IgnoredAny),
}

impl NameServersField {
    fn into_host_names(self) -> Vec<String> {
        match self {
            NameServersField::List(hosts) => hosts,
            NameServersField::Hosts { host_names } => host_names,
            NameServersField::Other(_) => Vec::new(),
        }
    }
}

/// Returns the first candidate that is present and non-empty.
fn first_present<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

impl WhoisApiResponse {
    /// Resolves the report fields with their fallback precedence.
    ///
    /// - organization, country: top-level registrant, then registry registrant
    /// - dates, status, raw text: registry data, then top-level record
    /// - nameservers: registry data only
    /// - estimated age: top-level record only
    pub(crate) fn into_report(self) -> WhoisReport {
        let record = self.whois_record.unwrap_or_default();
        let registry = record.registry_data.unwrap_or_default();
        let registrant = record.registrant.unwrap_or_default();
        let registry_registrant = registry.registrant.unwrap_or_default();

        WhoisReport {
            organization: first_present([
                registrant.organization.as_deref(),
                registry_registrant.organization.as_deref(),
            ]),
            country: first_present([
                registrant.country.as_deref(),
                registry_registrant.country.as_deref(),
            ]),
            created_date: first_present([
                registry.created_date.as_deref(),
                record.created_date.as_deref(),
            ]),
            updated_date: first_present([
                registry.updated_date.as_deref(),
                record.updated_date.as_deref(),
            ]),
            expires_date: first_present([
                registry.expires_date.as_deref(),
                record.expires_date.as_deref(),
            ]),
            status: first_present([registry.status.as_deref(), record.status.as_deref()]),
            name_servers: registry
                .name_servers
                .map(NameServersField::into_host_names)
                .unwrap_or_default(),
            estimated_domain_age: record.estimated_domain_age,
            raw_text: first_present([registry.raw_text.as_deref(), record.raw_text.as_deref()]),
        }
    }
}

/// Decodes a 200 response body.
pub(crate) fn parse_response(body: &str) -> Result<WhoisApiResponse, serde_json::Error> {
    serde_json::from_str(body)
}

/// Accepts strings as-is, renders numbers and booleans, joins string arrays
/// with a space. Anything else is treated as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text),
                    _ => None,
                })
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(" "))
            }
        }
        Value::Null | Value::Object(_) => None,
    }))
}

/// Decodes a nested object. Redacted strings, arrays and other non-object
/// shapes are treated as absent so field fallbacks still apply.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    }))
}

/// Accepts an integer, a whole-number float, or a numeric string of either.
/// Fractional or out-of-range values are treated as absent.
fn lenient_days<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(whole_days)),
        Value::String(text) => {
            let text = text.trim();
            text.parse()
                .ok()
                .or_else(|| text.parse().ok().and_then(whole_days))
        }
        _ => None,
    }))
}

fn whole_days(days: f64) -> Option<i64> {
    let in_range = days.is_finite() && days.abs() < i64::MAX as f64;
    (in_range && days.fract() == 0.0).then_some(days as i64)
}
