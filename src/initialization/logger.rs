//! Logger initialization.
//!
//! Log lines go to stderr so they never interleave with the report or the
//! JSON outcome on stdout.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable first; the
/// provided `level` then overrides it for this crate and as the global default.
/// HTTP dependencies are capped at `min(level, Info)` unless `RUST_LOG` names
/// them explicitly.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show the request lifecycle
/// email_domain_check user@example.com --log-level debug
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=reqwest=debug email_domain_check user@example.com
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    let env_filters = std::env::var(env_logger::DEFAULT_FILTER_ENV).unwrap_or_default();

    builder.filter_level(level);
    for (module, cap) in dependency_caps(&env_filters, level) {
        builder.filter_module(module, cap);
    }
    builder.filter_module("email_domain_check", level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                let emoji = match level {
                    log::Level::Error => "❌",
                    log::Level::Warn => "⚠️",
                    log::Level::Info => "✔️",
                    log::Level::Debug => "🔍",
                    log::Level::Trace => "🔬",
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    emoji,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init so a second call (tests) reports an error instead of panicking
    builder.try_init()?;

    Ok(())
}

/// Chatty HTTP dependencies kept quieter than the rest of the output.
const DEPENDENCY_TARGETS: [&str; 3] = ["reqwest", "hyper", "hyper_util"];

/// Caps for dependency targets that `env_filters` (a `RUST_LOG` value) does
/// not mention by name.
fn dependency_caps(env_filters: &str, level: LevelFilter) -> Vec<(&'static str, LevelFilter)> {
    let cap = level.min(LevelFilter::Info);
    DEPENDENCY_TARGETS
        .into_iter()
        .filter(|module| !has_directive(env_filters, module))
        .map(|module| (module, cap))
        .collect()
}

/// Whether a `RUST_LOG` value carries a `module=level` or bare `module` directive.
fn has_directive(env_filters: &str, module: &str) -> bool {
    let directives = env_filters.split('/').next().unwrap_or_default();
    directives
        .split(',')
        .filter_map(|directive| directive.split('=').next())
        .any(|name| name.trim() == module)
}
