//! email_domain_check library: email format check plus WHOIS-based domain trust signal
//!
//! Validates the shape of an email address, extracts its domain, looks the domain up
//! through the WhoisXML API, prints the registration details, and reports whether the
//! domain names a registrant organization.
//!
//! # Example
//!
//! ```no_run
//! use email_domain_check::{verify_email_domain, Config, Verdict, WhoisClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     api_key: std::env::var("WHOISXML_API_KEY")?,
//!     ..Default::default()
//! };
//! let client = WhoisClient::from_config(&config)?;
//!
//! let outcome = verify_email_domain(
//!     "someone@example.com",
//!     &client,
//!     config.language,
//!     &mut std::io::stdout(),
//! )
//! .await?;
//! if outcome.verdict != Verdict::Trusted {
//!     eprintln!("check {} by hand", outcome.email);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The lookup is async (reqwest); call it from within a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
mod email;
mod error_handling;
pub mod initialization;
mod output;
mod verify;
mod whois;

// Re-export public API
pub use config::{Config, Language, LogFormat, LogLevel, Opt, OutputFormat};
pub use email::{extract_domain, is_valid_email};
pub use error_handling::{ErrorType, InitializationError, WhoisError};
pub use output::{write_http_failure, write_json_outcome, write_report, ReportField};
pub use verify::{check_domain_whois, verify_email_domain, VerificationOutcome, Verdict};
pub use whois::{WhoisClient, WhoisLookup, WhoisReport};
