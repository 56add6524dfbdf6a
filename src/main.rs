//! CLI entry point for the pipe-puzzle board generator

use clap::Parser;
use pipewave::io::cli::{BoardProcessor, Cli};

fn main() -> pipewave::Result<()> {
    let cli = Cli::parse();
    let mut processor = BoardProcessor::new(cli);
    processor.process()
}
