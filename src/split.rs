//! Split a text file into numbered chunks of N lines
//!
//! `dump.hex` becomes `dump1.hex`, `dump2.hex`, ... next to the source.
//! Line endings are rewritten as CRLF.

use crate::NEWLINE;
use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Path of chunk `index` (1-based) for `src`
pub fn chunk_path(src: &Path, index: usize) -> PathBuf {
    let stem = src
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = match src.extension() {
        Some(ext) => format!("{}{}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}{}", stem, index),
    };
    src.with_file_name(name)
}

/// Split `src` into chunks of `lines_per_file` lines, returning the files written
pub fn split_file(src: &Path, lines_per_file: usize) -> Result<Vec<PathBuf>> {
    if lines_per_file == 0 {
        bail!("Lines per file must be at least 1");
    }

    let input = fs::File::open(src)
        .with_context(|| format!("Failed to read file: {}", src.display()))?;
    let mut reader = BufReader::new(input);

    let mut written = Vec::new();
    let mut current: Option<BufWriter<fs::File>> = None;
    let mut lines_in_chunk = 0;
    let mut line = Vec::new();

    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .with_context(|| format!("Failed to read file: {}", src.display()))?;
        if n == 0 {
            break;
        }

        let mut chunk = match current.take() {
            Some(chunk) => chunk,
            None => {
                let path = chunk_path(src, written.len() + 1);
                let file = fs::File::create(&path)
                    .with_context(|| format!("Failed to write: {}", path.display()))?;
                written.push(path);
                BufWriter::new(file)
            }
        };

        let terminated = strip_line_ending(&mut line);
        chunk.write_all(&line)?;
        if terminated {
            chunk.write_all(NEWLINE.as_bytes())?;
        }

        lines_in_chunk += 1;
        if lines_in_chunk == lines_per_file {
            chunk.flush()?;
            lines_in_chunk = 0;
        } else {
            current = Some(chunk);
        }
    }

    if let Some(mut chunk) = current.take() {
        chunk.flush()?;
    }

    Ok(written)
}

/// Drop a trailing `\n` or `\r\n`; true if there was one
fn strip_line_ending(line: &mut Vec<u8>) -> bool {
    if line.last() != Some(&b'\n') {
        return false;
    }
    line.pop();
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    true
}
