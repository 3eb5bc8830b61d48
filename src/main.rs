#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod comment;
mod config;
mod constants;
mod error;
#[cfg(test)]
mod fixtures;
mod input;
mod octocrab_utils;
mod token;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    cli::init_tracing();

    let cli = cli::Cli::parse_from(cli::normalize_args(std::env::args_os()));
    let config = config::Config::try_from(cli)?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    if let Some(comment) = app::run(&config, stdin).await? {
        println!("{}", serde_json::to_string_pretty(&comment)?);
    }
    Ok(())
}
