//! skillmeta CLI — extract structured metadata from skill READMEs.
//!
//! Summarizes a single README or a whole manifest of skills into JSON records
//! (title, description, examples, requirements).

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
