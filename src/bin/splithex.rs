//! splithex CLI
//!
//! Split a text file into numbered pieces of N lines each.

use anyhow::Result;
use boo_codec::split;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "splithex")]
#[command(author = "nzinfo <li.monan@gmail.com>")]
#[command(version)]
#[command(about = "Split a text file into numbered files of N lines")]
struct Cli {
    /// File to split
    file: PathBuf,

    /// Lines per output file
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    lines_per_file: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lines_per_file = usize::try_from(cli.lines_per_file)?;
    let files = split::split_file(&cli.file, lines_per_file)?;

    if cli.verbose {
        for file in &files {
            println!("Created: {}", file.display());
        }
    }

    Ok(())
}
