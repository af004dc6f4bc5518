//! Email address format checks and domain extraction.
//!
//! Key functions:
//! - `is_valid_email()` - Permissive shape check (not RFC 5322)
//! - `extract_domain()` - Lowercased part after the last `@`

use std::sync::LazyLock;

use regex::Regex;

/// Local part, `@`, host labels, then a dot and an alphabetic TLD of two or more letters.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Checks whether `email` has the shape of an email address.
///
/// The check is intentionally permissive: no IDN domains, no length limits,
/// and no rejection of consecutive dots. It only filters out input that
/// clearly has no domain to look up.
///
/// # Examples
///
/// ```
/// use email_domain_check::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("missing@tld"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Extracts the lowercased domain from an email address.
///
/// Only the final `@` matters, so `"a@b@Example.com"` yields `"example.com"`.
/// Input without any `@` is returned whole (lowercased); callers are expected
/// to run `is_valid_email()` first.
pub fn extract_domain(email: &str) -> String {
    email
        .rsplit_once('@')
        .map_or(email, |(_, domain)| domain)
        .to_lowercase()
}
