//! Ebook Studio CLI — turn a content brief into a multi-chapter ebook.
//!
//! Runs the four-stage agent pipeline, narrates its progress, and exports
//! the result as Markdown.

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
