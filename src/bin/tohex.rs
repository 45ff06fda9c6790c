//! tohex CLI
//!
//! Dump a binary file as `:`-prefixed hex lines.

use anyhow::Result;
use boo_codec::hex;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tohex")]
#[command(author = "nzinfo <li.monan@gmail.com>")]
#[command(version)]
#[command(about = "Dump a binary file as uppercase hex, 16 bytes per line")]
struct Cli {
    /// File to dump
    fromfile: PathBuf,

    /// Hex output file
    tofile: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lines = hex::dump_file(&cli.fromfile, &cli.tofile)?;

    if cli.verbose {
        println!("Dumped: {} -> {} ({} lines)", cli.fromfile.display(), cli.tofile.display(), lines);
    }

    Ok(())
}
