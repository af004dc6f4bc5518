//! Human-readable and JSON rendering.
//!
//! This module provides:
//! - Localized labels and messages (`Language`)
//! - The WHOIS report and HTTP failure lines
//! - The JSON outcome printed with `--output json`

mod messages;
mod report;

pub use messages::ReportField;
pub use report::{write_http_failure, write_json_outcome, write_report};
