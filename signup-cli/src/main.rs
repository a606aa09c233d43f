//! Signup command-line driver
//!
//! Loads the account directory once, validates the given registration and
//! submits it if the email is not registered yet.
//!
//! Usage:
//!   signup --username bob --email bob@example.com --password secret1
//!
//! Exits with status 0 only when the account was created.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use signup_cli::{CliConfig, run_signup};
use signup_core::DirectoryPolicy;
use signup_types::RegistrationCandidate;
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "signup")]
#[command(about = "Register an account with a remote directory")]
struct Args {
    /// Username to register
    #[arg(short, long, default_value = "")]
    username: String,

    /// Email address; rejected locally if the directory already has it
    #[arg(short, long, default_value = "")]
    email: String,

    /// Password (at least 6 characters)
    #[arg(short, long, env = "SIGNUP_PASSWORD", default_value = "", hide_env_values = true)]
    password: String,

    /// Directory service base URL (overrides the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Refuse to submit when the directory could not be loaded
    #[arg(long)]
    block_when_unavailable: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let mut config = CliConfig::load(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    if args.block_when_unavailable {
        config.coordinator.unavailable_directory = DirectoryPolicy::Block;
    }
    debug!("Using directory at {}", config.api.accounts_url());

    let candidate = RegistrationCandidate::new(args.username, args.email, args.password);
    let report = run_signup(&config, &candidate).await?;

    for line in &report.lines {
        println!("{line}");
    }
    info!("Signup finished: {:?}", report.outcome);

    Ok(if report.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
