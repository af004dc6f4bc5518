//! Email domain verification: format check, domain extraction, WHOIS lookup
//! and the final trust verdict.

use std::io::Write;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;

use crate::config::Language;
use crate::email::{extract_domain, is_valid_email};
use crate::output::{write_http_failure, write_report};
use crate::whois::{WhoisClient, WhoisLookup, WhoisReport};

/// Final result of a verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The address failed the format check; no lookup was made
    InvalidFormat,
    /// The domain's WHOIS record names a registrant organization
    Trusted,
    /// No organization found, or the lookup returned a non-200 status
    NeedsManualReview,
}

impl Verdict {
    /// Process exit code for this verdict.
    ///
    /// Fatal errors (transport, decode, initialization) use 1 and never
    /// produce a verdict.
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Trusted => 0,
            Verdict::NeedsManualReview => 2,
            Verdict::InvalidFormat => 3,
        }
    }
}

/// Everything learned about one email address.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationOutcome {
    /// Address as given
    pub email: String,
    /// Domain that was looked up (absent when the format check failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Final verdict
    pub verdict: Verdict,
    /// Resolved WHOIS fields (present only for HTTP 200)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<WhoisReport>,
    /// HTTP status of a failed lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    /// Raw response body of a failed lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_body: Option<String>,
}

/// Looks up `domain`, writes the report (or the failure lines) to `out`, and
/// returns whether the record names a registrant organization.
///
/// A non-200 response yields `Ok(false)`.
///
/// # Errors
///
/// Returns an error if the request fails, the 200 body is not JSON, or
/// writing to `out` fails. These are never folded into `Ok(false)`.
pub async fn check_domain_whois<W: Write>(
    client: &WhoisClient,
    domain: &str,
    language: Language,
    out: &mut W,
) -> Result<bool> {
    let lookup = lookup_and_report(client, domain, language, out).await?;
    Ok(lookup.is_trusted())
}

async fn lookup_and_report<W: Write>(
    client: &WhoisClient,
    domain: &str,
    language: Language,
    out: &mut W,
) -> Result<WhoisLookup> {
    let lookup = client
        .lookup(domain)
        .await
        .with_context(|| format!("WHOIS lookup for {} failed", domain))?;

    let written = match &lookup {
        WhoisLookup::Found(report) => write_report(out, domain, report, language),
        WhoisLookup::HttpFailure { status, body } => {
            write_http_failure(out, *status, body, language)
        }
    };
    written.context("Failed to write WHOIS report")?;

    Ok(lookup)
}

/// Verifies one email address and writes progress, report and verdict to `out`.
///
/// An address that fails `is_valid_email()` is reported and returned as
/// `Verdict::InvalidFormat` without extracting the domain or touching the
/// network.
///
/// # Errors
///
/// Same as `check_domain_whois()`.
///
/// # Example
///
/// ```no_run
/// use email_domain_check::{verify_email_domain, Config, Language, WhoisClient};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     api_key: std::env::var("WHOISXML_API_KEY")?,
///     ..Default::default()
/// };
/// let client = WhoisClient::from_config(&config)?;
/// let outcome =
///     verify_email_domain("user@example.com", &client, Language::En, &mut std::io::stdout())
///         .await?;
/// println!("{:?}", outcome.verdict);
/// # Ok(())
/// # }
/// ```
pub async fn verify_email_domain<W: Write>(
    email: &str,
    client: &WhoisClient,
    language: Language,
    out: &mut W,
) -> Result<VerificationOutcome> {
    if !is_valid_email(email) {
        info!("Rejected malformed email address, no lookup performed");
        writeln!(out, "{}", language.invalid_format(email))?;
        return Ok(VerificationOutcome {
            email: email.to_string(),
            domain: None,
            verdict: Verdict::InvalidFormat,
            report: None,
            http_status: None,
            http_body: None,
        });
    }

    let domain = extract_domain(email);
    debug!("Extracted domain {} via {}", domain, client.endpoint());
    writeln!(out, "{}", language.valid_format(email))?;
    writeln!(out, "{}", language.looking_up(&domain))?;

    let lookup = lookup_and_report(client, &domain, language, out).await?;

    let verdict = if lookup.is_trusted() {
        writeln!(out, "{}", language.trusted())?;
        Verdict::Trusted
    } else {
        writeln!(out, "{}", language.manual_review())?;
        Verdict::NeedsManualReview
    };

    let (report, http_status, http_body) = match lookup {
        WhoisLookup::Found(report) => (Some(report), None, None),
        WhoisLookup::HttpFailure { status, body } => (None, Some(status), Some(body)),
    };

    Ok(VerificationOutcome {
        email: email.to_string(),
        domain: Some(domain),
        verdict,
        report,
        http_status,
        http_body,
    })
}
