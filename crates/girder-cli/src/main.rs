use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Command};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Draw(args) => commands::draw(args),
        Command::Plan(args) => commands::plan(args),
        Command::Defaults => commands::defaults(),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
