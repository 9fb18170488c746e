//! Line reader
//!
//! Wraps any `BufRead` (stdin lock, buffered file, in-memory slice).

use std::io::{BufRead, ErrorKind};

use crate::error::Result;

/// Reads bytes and bounded lines with single-byte pushback
pub struct LineReader<R> {
    /// Underlying buffered source
    inner: R,

    /// Byte returned by `unread_byte`, served before `inner`
    pushback: Option<u8>,

    /// Bytes consumed so far (pushback excluded)
    offset: u64,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushback: None,
            offset: 0,
        }
    }

    /// Read the next byte, or `None` at end of stream
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        if let Some(byte) = self.pushback.take() {
            self.offset += 1;
            return Ok(Some(byte));
        }

        let byte = loop {
            match self.inner.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(buf) => break buf[0],
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        };
        self.inner.consume(1);
        self.offset += 1;

        Ok(Some(byte))
    }

    /// Push one byte back so the next `read_byte` returns it
    ///
    /// Only one byte of pushback is held. Calling this again before the
    /// byte is read back is a bug and panics in debug builds.
    pub fn unread_byte(&mut self, byte: u8) {
        debug_assert!(
            self.pushback.is_none(),
            "unread_byte called with a byte already pushed back"
        );
        if self.pushback.replace(byte).is_none() {
            self.offset = self.offset.saturating_sub(1);
        }
    }

    /// Read up to and including the next `\n`
    ///
    /// At most `max_length` bytes are stored; the rest of the line is
    /// consumed and dropped. Returns `None` if the stream ends before `\n`,
    /// discarding whatever was read.
    pub fn read_line(&mut self, max_length: usize) -> Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let mut dropped = 0usize;

        loop {
            match self.read_byte()? {
                None => {
                    tracing::trace!(partial = line.len(), "end of stream before line terminator");
                    return Ok(None);
                }
                Some(b'\n') => break,
                Some(byte) if line.len() < max_length => line.push(byte),
                Some(_) => dropped += 1,
            }
        }

        tracing::trace!(len = line.len(), dropped, "read line");
        Ok(Some(line))
    }

    /// Bytes consumed from the stream so far
    pub fn offset(&self) -> u64 {
        self.offset
    }
}
