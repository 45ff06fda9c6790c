//! Line-wrapping output for encoded groups

use crate::{MAX_LINE_WIDTH, NEWLINE};
use std::io::{self, Write};

/// Writes quads and escapes, wrapping at [`MAX_LINE_WIDTH`] without ever
/// splitting a group. The column counter lives here, one per session.
pub struct LineWrapper<W: Write> {
    inner: W,
    column: usize,
    lines: usize,
}

impl<W: Write> LineWrapper<W> {
    /// Start a session at column 0
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            column: 0,
            lines: 0,
        }
    }

    /// Write a complete unwrapped line, e.g. the filename header
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(NEWLINE.as_bytes())?;
        self.column = 0;
        Ok(())
    }

    /// Append a group, breaking the line first if it would not fit
    pub fn emit(&mut self, group: &str) -> io::Result<()> {
        if self.column + group.len() > MAX_LINE_WIDTH {
            self.inner.write_all(NEWLINE.as_bytes())?;
            self.column = 0;
        }
        if self.column == 0 && !group.is_empty() {
            self.lines += 1;
        }

        self.inner.write_all(group.as_bytes())?;
        self.column += group.len();
        Ok(())
    }

    /// Current column on the open line
    pub fn column(&self) -> usize {
        self.column
    }

    /// Lines started by [`emit`](Self::emit) so far
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Write the trailer newline and flush
    pub fn finish(&mut self) -> io::Result<()> {
        self.inner.write_all(NEWLINE.as_bytes())?;
        self.inner.flush()
    }

    /// Hand back the underlying writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}
