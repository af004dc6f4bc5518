//! Report rendering.

use std::io::{self, Write};

use super::messages::ReportField;
use crate::config::Language;
use crate::verify::VerificationOutcome;
use crate::whois::WhoisReport;

/// Writes the WHOIS report, one labeled line per field.
///
/// Absent values print the language's unknown placeholder. Nameservers are
/// joined with `", "`. The raw WHOIS text is not printed.
pub fn write_report<W: Write>(
    out: &mut W,
    domain: &str,
    report: &WhoisReport,
    language: Language,
) -> io::Result<()> {
    let unknown = language.unknown();
    let text = |value: &Option<String>| value.as_deref().unwrap_or(unknown).to_string();

    let name_servers = if report.name_servers.is_empty() {
        unknown.to_string()
    } else {
        report.name_servers.join(", ")
    };
    let age = report
        .estimated_domain_age
        .map_or_else(|| unknown.to_string(), |days| language.days(days));

    let lines = [
        (ReportField::Domain, domain.to_string()),
        (ReportField::Organization, text(&report.organization)),
        (ReportField::Country, text(&report.country)),
        (ReportField::Created, text(&report.created_date)),
        (ReportField::Updated, text(&report.updated_date)),
        (ReportField::Expires, text(&report.expires_date)),
        (ReportField::Status, text(&report.status)),
        (ReportField::NameServers, name_servers),
        (ReportField::DomainAge, age),
    ];

    writeln!(out)?;
    for (field, value) in lines {
        writeln!(out, "{}: {}", language.label(field), value)?;
    }
    Ok(())
}

/// Writes the failure line for a non-200 response followed by the raw body.
pub fn write_http_failure<W: Write>(
    out: &mut W,
    status: u16,
    body: &str,
    language: Language,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", language.lookup_failed(status))?;
    writeln!(out, "{}", body)
}

/// Writes the outcome as a single pretty-printed JSON object.
pub fn write_json_outcome<W: Write>(out: &mut W, outcome: &VerificationOutcome) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, outcome)?;
    writeln!(out)
}
