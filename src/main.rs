//! texwatch CLI
//!
//! Usage: texwatch <SOURCE>
//!
//! Runs until killed, rebuilding SOURCE whenever one of its inputs changes.

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::watch::cmd_watch(&cli.source)
}
