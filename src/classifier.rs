//! Byte classifier
//!
//! Turns the input byte stream into tokens: literal triples ready to pack and
//! null runs ready to escape. One byte of lookahead is carried between calls.

use crate::{MAX_NULL_RUN, MIN_NULL_RUN};
use std::io::{self, Bytes, Read};

/// Unit of work produced by the [`Classifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `len` real bytes (1..=3); `bytes[len..]` is zero
    Literal { bytes: [u8; 3], len: usize },
    /// A run of `MIN_NULL_RUN..=MAX_NULL_RUN` zero bytes
    NullRun(u8),
    /// Input exhausted
    End,
}

impl Token {
    fn literal(bytes: [u8; 3], len: usize) -> Self {
        if len == 0 {
            Token::End
        } else {
            Token::Literal { bytes, len }
        }
    }
}

/// Streaming tokenizer over a byte source
pub struct Classifier<R> {
    input: Bytes<R>,
    /// Byte read by a previous call that belongs to the next token
    remainder: Option<u8>,
    consumed: u64,
}

impl<R: Read> Classifier<R> {
    /// Wrap a reader. Pass a buffered reader; input is consumed byte by byte.
    pub fn new(reader: R) -> Self {
        Self {
            input: reader.bytes(),
            remainder: None,
            consumed: 0,
        }
    }

    /// Produce the next token
    pub fn next_token(&mut self) -> io::Result<Token> {
        let mut bytes = [0u8; 3];
        let mut len = 0;
        let mut nulls: u8 = 0;

        loop {
            let byte = match self.remainder.take() {
                Some(byte) => byte,
                None => match self.input.next().transpose()? {
                    Some(byte) => {
                        self.consumed += 1;
                        byte
                    }
                    None => break,
                },
            };

            if byte == 0 && len == 0 {
                nulls += 1;
                if nulls > MAX_NULL_RUN {
                    self.remainder = Some(0);
                    return Ok(Token::NullRun(MAX_NULL_RUN));
                }
            } else if nulls == 0 {
                bytes[len] = byte;
                len += 1;
                if len == bytes.len() {
                    return Ok(Token::Literal { bytes, len });
                }
            } else if nulls < MIN_NULL_RUN {
                // Too short for an escape: the nulls become literal bytes.
                // `bytes` is still all zero here.
                len = usize::from(nulls);
                bytes[len] = byte;
                len += 1;
                nulls = 0;
                if len == bytes.len() {
                    return Ok(Token::Literal { bytes, len });
                }
            } else {
                self.remainder = Some(byte);
                return Ok(Token::NullRun(nulls));
            }
        }

        if nulls >= MIN_NULL_RUN {
            Ok(Token::NullRun(nulls))
        } else if nulls > 0 {
            Ok(Token::literal(bytes, usize::from(nulls)))
        } else {
            Ok(Token::literal(bytes, len))
        }
    }

    /// Bytes read but not yet assigned to a token
    pub fn remainder(&self) -> Option<u8> {
        self.remainder
    }

    /// Bytes pulled from the reader so far
    pub fn bytes_read(&self) -> u64 {
        self.consumed
    }
}

impl<R: Read> Iterator for Classifier<R> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Token::End) => None,
            other => Some(other),
        }
    }
}
