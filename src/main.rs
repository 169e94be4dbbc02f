//! OpsDesk access CLI
//!
//! Inspect the role catalog and evaluate access guards from the shell.

use anyhow::Context;
use clap::Parser;
use opsdesk::cli::{Cli, execute};
use opsdesk::config::Config;
use opsdesk::utils::logging::init_tracing;
use std::io;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::from_env().context("loading configuration from environment")?,
    };
    init_tracing(&config.logging)?;

    let code = execute(cli.command, &config, &mut io::stdout().lock())?;
    Ok(code)
}
