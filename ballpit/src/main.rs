//! # Ballpit
//!
//! Entry point for the ballpit binary: parse the command line, install the
//! tracing subscriber and hand over to [`ballpit::app::run`].

use anyhow::Result;
use ballpit::cli::Cli;
use clap::Parser;
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .init();

    ballpit::app::run(&cli)?;
    Ok(())
}
