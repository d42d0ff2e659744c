//! The byte-sink seam between writers and their destinations.
//!
//! Writers in this crate are unbuffered: every higher-level write (strings,
//! lines, formatted output) is built from repeated single-byte writes and
//! fails fast the instant one of them fails, leaving only the
//! successfully-written prefix in the sink.

use crate::error::Result;

/// A destination that accepts one byte at a time.
///
/// Implemented by [`Handle`](crate::Handle) (in write/append mode),
/// [`Console`](crate::Console), and `Vec<u8>` (the in-memory sink tests
/// use).
pub trait ByteSink {
    /// Write a single byte.
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Write every byte of `s`, failing fast on the first write error.
    fn write_str(&mut self, s: &str) -> Result<()> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }

        Ok(())
    }

    /// Write `line` followed by a newline byte.
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.write_str(line)?;
        self.write_byte(b'\n')
    }
}

impl ByteSink for Vec<u8> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.push(byte);
        Ok(())
    }
}
