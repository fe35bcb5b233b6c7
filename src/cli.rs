//! CLI Argument Parsing

use std::path::PathBuf;

use clap::Parser;

/// texwatch - rebuild a LaTeX document whenever its inputs change
#[derive(Parser, Debug)]
#[command(name = "texwatch")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Settings are read from ./texwatch.toml, the user config directory and TEXWATCH_* variables."
)]
pub struct Cli {
    /// Primary LaTeX source file (e.g. thesis.tex)
    pub source: PathBuf,
}
