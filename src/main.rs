//! CLI entry point for the word-search puzzle generator

use clap::Parser;
use wordsearch::io::cli::{Cli, PuzzleRunner};
use wordsearch::io::logging::init_logger;

fn main() -> wordsearch::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let mut runner = PuzzleRunner::new(cli);
    runner.process()
}
