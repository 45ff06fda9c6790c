//! # boo-codec
//!
//! BOO encoding: a printable, line-wrapped text representation of binary files.
//!
//! ## Format
//!
//! An encoded file looks like this:
//!
//! ```text
//! firmware.bin
//! @Tm?~5o`40~0
//! ```
//!
//! - **Line 1** is the base name of the source file, written as-is.
//! - Every 3 input bytes are packed into a **quad** of 4 characters. Each
//!   character carries 6 bits, offset from `'0'`, so quads use `'0'..='o'`.
//! - A run of 2 to 78 zero bytes is replaced by an **escape**: `~` followed by
//!   the run length mapped through the same alphabet (`~2` .. `~~`).
//! - Lines are wrapped at 72 characters. Quads and escapes are never split.
//! - When the last triple had to be padded with zero bytes, one `~0` marker per
//!   synthetic byte is appended so a decoder knows how many bytes to discard.
//! - All line breaks are CRLF and the output ends with one.
//!
//! ## Padding marker ambiguity
//!
//! `~0` reads like a zero-length null run. The encoder never emits a real run
//! shorter than [`MIN_NULL_RUN`], so `~0` only ever appears as the terminal
//! group(s) of the stream, and a decoder has to treat it that way.
//!
//! ## Companion tools
//!
//! - [`hex`]: plain `:`-prefixed uppercase hex dump, 16 bytes per line.
//! - [`split`]: split a text file into numbered chunks of N lines.

pub mod alphabet;
pub mod classifier;
pub mod encoder;
pub mod hex;
pub mod pack;
pub mod split;
pub mod writer;

/// Maximum characters per encoded line (header excluded)
pub const MAX_LINE_WIDTH: usize = 72;

/// Longest null run a single escape can carry
pub const MAX_NULL_RUN: u8 = 78;

/// Shortest null run worth an escape; shorter runs stay literal
pub const MIN_NULL_RUN: u8 = 2;

/// Bytes per hex dump line
pub const HEX_BLOCK_LEN: usize = 16;

/// Line terminator for every generated text file
pub const NEWLINE: &str = "\r\n";

pub use alphabet::{from_char, to_char, ESCAPE};
pub use classifier::{Classifier, Token};
pub use encoder::{EncodeStats, Encoder};
pub use pack::{escape, pack, PADDING_MARKER};
pub use writer::LineWrapper;
