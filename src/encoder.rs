//! BOO encoder

use crate::classifier::{Classifier, Token};
use crate::pack::{escape, pack, padding};
use crate::writer::LineWrapper;
use anyhow::{Context, Result};
use std::fs;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Counters for one encode session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Input bytes consumed
    pub bytes_read: u64,
    /// Quads emitted for literal triples
    pub quads: usize,
    /// Escapes emitted for null runs
    pub null_runs: usize,
    /// Synthetic bytes added to complete the final triple
    pub padding: usize,
    /// Encoded lines, header and trailer excluded
    pub lines: usize,
}

/// Encodes binary data into BOO text
pub struct Encoder {
    // Currently stateless, but reserved for future options
}

impl Encoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self {}
    }

    /// Encode a buffer to a string, `name` becomes the header line
    pub fn encode(&self, name: &str, data: &[u8]) -> Result<String> {
        let mut output = Vec::new();
        self.encode_to_writer(name, data, &mut output)?;
        Ok(String::from_utf8(output)?)
    }

    /// Encode everything `reader` yields into `writer`
    pub fn encode_to_writer<R: Read, W: Write>(
        &self,
        name: &str,
        reader: R,
        writer: W,
    ) -> Result<EncodeStats> {
        let mut session = Session::new(reader, writer);
        session.run(name)?;
        Ok(session.stats())
    }

    /// Encode the file at `src` into a new file at `dst`
    pub fn encode_file(&self, src: &Path, dst: &Path) -> Result<EncodeStats> {
        let name = src
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("Invalid filename: {}", src.display()))?
            .to_string_lossy()
            .to_string();

        let input = fs::File::open(src)
            .with_context(|| format!("Failed to read file: {}", src.display()))?;
        let output = fs::File::create(dst)
            .with_context(|| format!("Failed to write: {}", dst.display()))?;

        self.encode_to_writer(&name, BufReader::new(input), BufWriter::new(output))
            .with_context(|| format!("Failed to encode {} into {}", src.display(), dst.display()))
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Streaming,
    Finalizing,
    Done,
}

/// One pass over one input into one output
struct Session<R: Read, W: Write> {
    state: State,
    tokens: Classifier<R>,
    out: LineWrapper<W>,
    fill_nulls: usize,
    stats: EncodeStats,
}

impl<R: Read, W: Write> Session<R, W> {
    fn new(reader: R, writer: W) -> Self {
        Self {
            state: State::Start,
            tokens: Classifier::new(reader),
            out: LineWrapper::new(writer),
            fill_nulls: 0,
            stats: EncodeStats::default(),
        }
    }

    fn run(&mut self, name: &str) -> Result<()> {
        while self.state != State::Done {
            self.state = self.step(name)?;
        }
        Ok(())
    }

    fn step(&mut self, name: &str) -> Result<State> {
        match self.state {
            State::Start => {
                self.out.write_line(name)?;
                Ok(State::Streaming)
            }
            State::Streaming => match self.tokens.next_token()? {
                Token::Literal { bytes, len } => {
                    // Short triples only occur at the end; `bytes` is zero padded
                    self.fill_nulls = bytes.len() - len;
                    let quad: String = pack(bytes).iter().collect();
                    self.out.emit(&quad)?;
                    self.stats.quads += 1;
                    Ok(State::Streaming)
                }
                Token::NullRun(count) => {
                    self.fill_nulls = 0;
                    let group: String = escape(count).iter().collect();
                    self.out.emit(&group)?;
                    self.stats.null_runs += 1;
                    Ok(State::Streaming)
                }
                Token::End => Ok(State::Finalizing),
            },
            State::Finalizing => {
                if self.fill_nulls > 0 {
                    self.out.emit(&padding(self.fill_nulls))?;
                }
                self.out.finish()?;
                self.stats.padding = self.fill_nulls;
                Ok(State::Done)
            }
            State::Done => Ok(State::Done),
        }
    }

    fn stats(&self) -> EncodeStats {
        EncodeStats {
            bytes_read: self.tokens.bytes_read(),
            lines: self.out.lines(),
            ..self.stats
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(encoded: &str) -> Vec<&str> {
        let mut lines: Vec<&str> = encoded.split("\r\n").collect();
        assert_eq!(lines.pop(), Some(""), "output must end with CRLF");
        lines.remove(0);
        lines
    }

    #[test]
    fn test_encode_empty() {
        let result = Encoder::new().encode("empty.bin", b"").unwrap();
        assert_eq!(result, "empty.bin\r\n\r\n");
    }

    #[test]
    fn test_encode_header_and_trailer() {
        let result = Encoder::new().encode("firmware.bin", b"BOO\0\0\0\0\0\xFF\x01").unwrap();
        assert_eq!(result, "firmware.bin\r\n@Tm?~5o`40~0\r\n");
    }

    #[test]
    fn test_encode_single_null_stays_literal() {
        let result = Encoder::new().encode("t.bin", &[0x41, 0x00, 0x42]).unwrap();
        assert_eq!(result, "t.bin\r\n@@12\r\n");
    }

    #[test]
    fn test_encode_padding_markers() {
        let encoder = Encoder::new();
        assert_eq!(body(&encoder.encode("a", b"abc").unwrap()), vec!["HF9S"]);
        assert!(body(&encoder.encode("a", b"abcd").unwrap())[0].ends_with("~0~0"));
        assert!(body(&encoder.encode("a", b"abcde").unwrap())[0].ends_with("~0"));
        assert!(!body(&encoder.encode("a", b"abcde").unwrap())[0].ends_with("~0~0"));
    }

    #[test]
    fn test_encode_tail_null_run_has_no_padding() {
        // "abc" then literal "d\0\0" completes a triple, nothing left over
        let result = Encoder::new().encode("a", b"abcd\0\0").unwrap();
        assert!(!result.contains('~'));
        let result = Encoder::new().encode("a", b"abc\0\0").unwrap();
        assert_eq!(body(&result), vec!["HF9S~2"]);
    }

    #[test]
    fn test_encode_trailing_single_null() {
        let result = Encoder::new().encode("a", b"abc\0").unwrap();
        assert_eq!(body(&result), vec!["HF9S0000~0~0"]);
    }

    #[test]
    fn test_encode_max_null_run() {
        let mut data = vec![0u8; 79];
        data.extend_from_slice(&[0x41, 0x42]);
        let result = Encoder::new().encode("a", &data).unwrap();
        assert_eq!(body(&result), vec!["~~0452"]);
    }

    #[test]
    fn test_encode_wraps_lines() {
        let data: Vec<u8> = (0..=255u8).cycle().take(3000).collect();
        let result = Encoder::new().encode("big.bin", &data).unwrap();
        let lines = body(&result);
        assert_eq!(lines.len(), 3000 / 3 / 18 + 1);
        for line in &lines {
            assert!(line.len() <= 72);
            assert_eq!(line.len() % 4, 0);
        }
    }

    #[test]
    fn test_encode_stats() {
        let mut output = Vec::new();
        let stats = Encoder::new()
            .encode_to_writer("a", &b"BOO\0\0\0\0\0\xFF\x01"[..], &mut output)
            .unwrap();
        assert_eq!(
            stats,
            EncodeStats {
                bytes_read: 10,
                quads: 2,
                null_runs: 1,
                padding: 1,
                lines: 1,
            }
        );
    }

    #[test]
    fn test_encode_file_uses_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("payload.dat");
        let dst = dir.path().join("payload.boo");
        fs::write(&src, b"BOO").unwrap();

        let stats = Encoder::new().encode_file(&src, &dst).unwrap();
        assert_eq!(stats.bytes_read, 3);
        assert_eq!(fs::read_to_string(&dst).unwrap(), "payload.dat\r\n@Tm?\r\n");
    }

    #[test]
    fn test_encode_file_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = Encoder::new()
            .encode_file(&dir.path().join("nope"), &dir.path().join("out"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
