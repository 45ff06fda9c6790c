//! toboo CLI
//!
//! Encode a binary file into BOO text.

use anyhow::Result;
use boo_codec::Encoder;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "toboo")]
#[command(author = "nzinfo <li.monan@gmail.com>")]
#[command(version)]
#[command(about = "Encode a binary file as printable BOO text")]
struct Cli {
    /// File to encode
    fromfile: PathBuf,

    /// Encoded output file
    tofile: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stats = Encoder::new().encode_file(&cli.fromfile, &cli.tofile)?;

    if cli.verbose {
        println!(
            "Encoded: {} -> {} ({} bytes, {} quads, {} null runs, {} lines)",
            cli.fromfile.display(),
            cli.tofile.display(),
            stats.bytes_read,
            stats.quads,
            stats.null_runs,
            stats.lines,
        );
    }

    Ok(())
}
