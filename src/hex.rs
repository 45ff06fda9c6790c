//! Hex dump encoder
//!
//! Each line is `:` followed by up to [`HEX_BLOCK_LEN`] bytes in uppercase hex.

use crate::{HEX_BLOCK_LEN, NEWLINE};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Dump `reader` into `writer`, returning the number of lines written
pub fn dump<R: Read, W: Write>(mut reader: R, mut writer: W) -> Result<usize> {
    let mut block = [0u8; HEX_BLOCK_LEN];
    let mut line = Vec::with_capacity(1 + HEX_BLOCK_LEN * 2 + NEWLINE.len());
    let mut lines = 0;

    loop {
        let n = read_block(&mut reader, &mut block)?;
        if n == 0 {
            break;
        }

        line.clear();
        line.push(b':');
        for &b in &block[..n] {
            line.push(HEX_DIGITS[usize::from(b >> 4)]);
            line.push(HEX_DIGITS[usize::from(b & 0x0F)]);
        }
        line.extend_from_slice(NEWLINE.as_bytes());
        writer.write_all(&line)?;
        lines += 1;
    }

    writer.flush()?;
    Ok(lines)
}

/// Dump the file at `src` into a new file at `dst`
pub fn dump_file(src: &Path, dst: &Path) -> Result<usize> {
    let input = fs::File::open(src)
        .with_context(|| format!("Failed to read file: {}", src.display()))?;
    let output = fs::File::create(dst)
        .with_context(|| format!("Failed to write: {}", dst.display()))?;

    dump(BufReader::new(input), BufWriter::new(output))
        .with_context(|| format!("Failed to dump {} into {}", src.display(), dst.display()))
}

/// Fill `block` as far as the input allows; short only at end of input
fn read_block<R: Read>(reader: &mut R, block: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < block.len() {
        match reader.read(&mut block[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump_str(data: &[u8]) -> String {
        let mut output = Vec::new();
        dump(data, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    /// Reader handing out one byte per call
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.0[0];
            self.0 = &self.0[1..];
            Ok(1)
        }
    }

    #[test]
    fn test_dump_empty() {
        assert_eq!(dump_str(b""), "");
    }

    #[test]
    fn test_dump_short_block() {
        assert_eq!(dump_str(&[0x00, 0xAB, 0x7F]), ":00AB7F\r\n");
    }

    #[test]
    fn test_dump_splits_blocks() {
        let data: Vec<u8> = (0..20).collect();
        assert_eq!(
            dump_str(&data),
            ":000102030405060708090A0B0C0D0E0F\r\n:10111213\r\n"
        );
    }

    #[test]
    fn test_dump_fills_blocks_from_short_reads() {
        let data = [0xFFu8; 32];
        let mut output = Vec::new();
        let lines = dump(Trickle(&data), &mut output).unwrap();
        assert_eq!(lines, 2);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, format!(":{0}\r\n:{0}\r\n", "FF".repeat(16)));
    }

    #[test]
    fn test_dump_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("rom.bin");
        let dst = dir.path().join("rom.hex");
        fs::write(&src, b"\x01\x02").unwrap();

        assert_eq!(dump_file(&src, &dst).unwrap(), 1);
        assert_eq!(fs::read_to_string(&dst).unwrap(), ":0102\r\n");
    }
}
