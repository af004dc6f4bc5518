//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;

use clap::{Parser, ValueEnum};
use strum_macros::EnumIter;
use url::Url;

use crate::config::constants::{
    API_KEY_ENV, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ENDPOINT_ENV, WHOIS_API_ENDPOINT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Display language for the report and verdict messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, EnumIter)]
pub enum Language {
    /// English
    En,
    /// Japanese
    Ja,
}

/// How the verification outcome is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report lines (default)
    Plain,
    /// A single JSON object describing the outcome
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use email_domain_check::Config;
///
/// let config = Config {
///     api_key: std::env::var("WHOISXML_API_KEY").unwrap_or_default(),
///     timeout_seconds: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct Config {
    /// WhoisXML API key
    pub api_key: String,

    /// WHOIS lookup endpoint
    pub endpoint: String,

    /// HTTP request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Language used for the report and verdict
    pub language: Language,

    /// Output format for the outcome
    pub output: OutputFormat,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: WHOIS_API_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            language: Language::En,
            output: OutputFormat::Plain,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

// Hand-written so the API key never ends up in logs or panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .field("language", &self.language)
            .field("output", &self.output)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Command-line options for the `email_domain_check` binary.
#[derive(Parser)]
#[command(
    name = "email_domain_check",
    version,
    about = "Validate an email address and check its domain's WHOIS registration"
)]
pub struct Opt {
    /// Email address to verify
    pub email: String,

    /// WhoisXML API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: String,

    /// WHOIS lookup endpoint
    #[arg(long, env = ENDPOINT_ENV, default_value = WHOIS_API_ENDPOINT)]
    pub endpoint: Url,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Language for the report and verdict
    #[arg(long, value_enum, default_value_t = Language::En)]
    pub language: Language,

    /// Output format (plain report or a JSON object)
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Log level (RUST_LOG is read first, this flag overrides it)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            api_key: opt.api_key,
            endpoint: opt.endpoint.to_string(),
            timeout_seconds: opt.timeout_seconds,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            language: opt.language,
            output: opt.output,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
