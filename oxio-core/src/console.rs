//! Standard-stream bindings.
//!
//! [`Console`] mirrors the file write path on stdout. The input side reads
//! stdin one byte at a time and is not routed through any read-ahead
//! buffer: token extraction is whitespace-delimited in the manner of
//! `scanf("%s")`, and [`skip_line`] discards bytes until a newline is
//! consumed. Both are implemented over a generic `Read` so they can be
//! exercised against in-memory sources.

use std::io::{self, Read, Write};

use oxio_text::TextBuf;

use crate::error::{OxioError, Result};
use crate::format::{self, Arg};
use crate::sink::ByteSink;

/// A stdout-bound byte sink.
///
/// All [`ByteSink`] writers (`write_byte`, `write_str`, `write_line`) and
/// [`write_formatted`](Console::write_formatted) work on it exactly as on a
/// file [`Handle`](crate::Handle).
#[derive(Debug)]
pub struct Console {
    out: io::Stdout,
}

impl Console {
    /// Bind to standard output.
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    /// Write a formatted string to stdout. See
    /// [`format::write_formatted`].
    pub fn write_formatted(&mut self, fmt: &str, args: &[Arg<'_>]) -> Result<usize> {
        format::write_formatted(self, fmt, args)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSink for Console {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.out.write_all(&[byte])?;
        Ok(())
    }
}

/// Read one byte from `source`; `Ok(None)` at end of input.
pub fn read_byte<R: Read>(source: &mut R) -> Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match source.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Read the next whitespace-delimited token from `source`.
///
/// Leading ASCII whitespace is skipped; bytes are then collected until the
/// next whitespace byte or end of input. Returns `Ok(None)` when the input
/// ends before any token byte is seen.
///
/// # Errors
///
/// [`OxioError::InvalidArgument`] when `capacity` is zero;
/// [`OxioError::LineTooLong`] when the token does not fit in
/// `capacity - 1` bytes.
pub fn read_token<R: Read>(source: &mut R, capacity: usize) -> Result<Option<TextBuf>> {
    if capacity == 0 {
        return Err(OxioError::invalid_argument("token capacity must be at least 1"));
    }

    // Skip leading whitespace.
    let first = loop {
        match read_byte(source)? {
            Some(byte) if byte.is_ascii_whitespace() => continue,
            Some(byte) => break byte,
            None => return Ok(None),
        }
    };

    let mut token = TextBuf::with_capacity(capacity);
    if token.push(first).is_err() {
        return Err(OxioError::line_too_long(capacity));
    }

    loop {
        match read_byte(source)? {
            Some(byte) if byte.is_ascii_whitespace() => return Ok(Some(token)),
            Some(byte) => {
                if token.push(byte).is_err() {
                    return Err(OxioError::line_too_long(capacity));
                }
            }
            None => return Ok(Some(token)),
        }
    }
}

/// Discard bytes from `source` until a newline is consumed or the input
/// ends.
pub fn skip_line_from<R: Read>(source: &mut R) -> Result<()> {
    loop {
        match read_byte(source)? {
            Some(b'\n') | None => return Ok(()),
            Some(_) => continue,
        }
    }
}

/// Read one byte from stdin; `Ok(None)` at end of input.
pub fn next_char() -> Result<Option<u8>> {
    read_byte(&mut io::stdin().lock())
}

/// Read the next whitespace-delimited token from stdin.
pub fn next_token(capacity: usize) -> Result<Option<TextBuf>> {
    read_token(&mut io::stdin().lock(), capacity)
}

/// Discard stdin bytes until a newline is consumed or the input ends.
pub fn skip_line() -> Result<()> {
    skip_line_from(&mut io::stdin().lock())
}
