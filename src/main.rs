//! CLI entry point for quiz generation and annotation compositing

use clap::Parser;
use quizsmith::io::cli::{self, Cli};

fn main() -> quizsmith::Result<()> {
    let cli = Cli::parse();
    cli::run(cli)
}
