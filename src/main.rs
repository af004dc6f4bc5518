//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `email_domain_check` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Output format selection and exit codes
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use email_domain_check::initialization::init_logger_with;
use email_domain_check::{
    verify_email_domain, write_json_outcome, Config, Opt, OutputFormat, VerificationOutcome,
    WhoisClient,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if it exists)
    // so WHOISXML_API_KEY does not have to be exported by hand.
    // Try the current directory first, then the executable's directory.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();
    let email = opt.email.clone();
    let config = Config::from(opt);

    match run(&email, &config).await {
        Ok(outcome) => process::exit(outcome.verdict.exit_code()),
        Err(e) => {
            eprintln!("email_domain_check error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(email: &str, config: &Config) -> Result<VerificationOutcome> {
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = WhoisClient::from_config(config).context("Failed to initialize WHOIS client")?;

    match config.output {
        OutputFormat::Plain => {
            verify_email_domain(email, &client, config.language, &mut io::stdout()).await
        }
        OutputFormat::Json => {
            let outcome =
                verify_email_domain(email, &client, config.language, &mut io::sink()).await?;
            write_json_outcome(&mut io::stdout(), &outcome)
                .context("Failed to write JSON outcome")?;
            Ok(outcome)
        }
    }
}
