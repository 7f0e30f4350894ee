//! CLI entry point for the tile assembler

use clap::Parser;
use jigsaw_tiles::io::cli::{Cli, FileProcessor};

fn main() -> jigsaw_tiles::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
