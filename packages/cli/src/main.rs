//! Issue a JaaS meeting token and print it to stdout

mod cli;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use jaas_jwt::{JwtToken, PrivateKey};
use logging::LoggingTransformer;

fn main() -> anyhow::Result<()> {
    LoggingTransformer::init();

    let cli = Cli::parse();
    let token = issue(&cli)?;
    println!("{token}");
    Ok(())
}

fn issue(cli: &Cli) -> anyhow::Result<JwtToken> {
    let request = cli.token_request()?;

    let pem = std::fs::read(&cli.key)
        .with_context(|| format!("reading private key {}", cli.key.display()))?;
    let key = PrivateKey::from_pem_bytes(&pem)
        .with_context(|| format!("loading private key {}", cli.key.display()))?;
    LoggingTransformer::log_key_loaded(&cli.key.display().to_string(), key.der(), key.bits());

    request.issue(&key).context("signing token")
}
