//! Fixed-capacity read-ahead buffering.
//!
//! `BufferedReader` presents any byte source as a sequence of individual
//! bytes, staging reads through a fixed 512-byte buffer that is refilled
//! only once fully consumed. The refill protocol and the end-of-stream
//! latch are the load-bearing state machine of this crate:
//!
//! - `refill` is *refused* unless the cursor sits at `BUFFER_SIZE`, so a
//!   partially consumed buffer can never trigger a wasted read.
//! - A refill that returns fewer than `BUFFER_SIZE` bytes leaves the cursor
//!   stuck below `BUFFER_SIZE` once those bytes are consumed; the next pull
//!   then latches end-of-stream instead of attempting another refill.
//! - The latch is one-way: once set, no operation touches the source again
//!   for the reader's lifetime.

use std::io::{ErrorKind, Read};

use oxio_text::TextBuf;

use crate::error::{OxioError, Result};

/// Capacity of the read-ahead buffer, in bytes.
pub const BUFFER_SIZE: usize = 512;

/// Outcome of a [`BufferedReader::refill`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefillStatus {
    /// The buffer was repopulated and the cursor reset to zero. Reported
    /// even when zero bytes were obtained; exhaustion is discovered by the
    /// next pull, not here.
    Filled,
    /// The request was refused because unconsumed bytes remain. State is
    /// unchanged.
    Denied,
}

/// A byte source staged through a fixed read-ahead buffer.
#[derive(Debug)]
pub struct BufferedReader<R: Read> {
    /// Underlying source, exclusively owned.
    source: R,
    /// Staging buffer. Indices `[valid, BUFFER_SIZE)` are stale after a
    /// short refill and are never surfaced.
    buffer: [u8; BUFFER_SIZE],
    /// Cursor into `buffer`, range `[0, BUFFER_SIZE]`.
    position: usize,
    /// Bytes of `buffer` that hold real data from the last refill.
    valid: usize,
    /// One-way end-of-stream latch.
    end_reached: bool,
}

impl<R: Read> BufferedReader<R> {
    /// Create a reader over `source`.
    ///
    /// The cursor starts at `BUFFER_SIZE`, so the first pull performs the
    /// first refill.
    pub fn new(source: R) -> Self {
        Self {
            source,
            buffer: [0; BUFFER_SIZE],
            position: BUFFER_SIZE,
            valid: 0,
            end_reached: false,
        }
    }

    /// Get a reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Get a mutable reference to the underlying source.
    ///
    /// Reading from the source directly desynchronizes it from the staged
    /// bytes; block transfers use this deliberately.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Consume this reader and return the underlying source.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Current cursor position, range `[0, BUFFER_SIZE]`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of valid bytes from the last refill.
    pub fn valid(&self) -> usize {
        self.valid
    }

    /// Check whether end-of-stream has been latched.
    pub fn end_reached(&self) -> bool {
        self.end_reached
    }

    /// Repopulate the buffer from the source.
    ///
    /// Refused with [`RefillStatus::Denied`] while `position < BUFFER_SIZE`
    /// (unconsumed bytes remain); state is byte-for-byte unchanged on
    /// refusal. Otherwise reads until the buffer is full or the source
    /// reports end-of-input, records the obtained count in `valid`, and
    /// resets the cursor to zero — always [`RefillStatus::Filled`], even
    /// for zero bytes.
    pub fn refill(&mut self) -> Result<RefillStatus> {
        if self.position < BUFFER_SIZE {
            return Ok(RefillStatus::Denied);
        }

        let mut filled = 0;
        while filled < BUFFER_SIZE {
            match self.source.read(&mut self.buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        self.valid = filled;
        self.position = 0;

        Ok(RefillStatus::Filled)
    }

    /// Pull the next byte, refilling the buffer when it is fully consumed.
    ///
    /// Returns `Ok(None)` once the source is exhausted; the exhaustion is
    /// latched and the source is never read again.
    pub fn next_byte(&mut self) -> Result<Option<u8>> {
        if self.end_reached {
            return Ok(None);
        }

        loop {
            if self.position < self.valid {
                let byte = self.buffer[self.position];
                self.position += 1;
                return Ok(Some(byte));
            }

            if self.position == BUFFER_SIZE {
                // Refill resets the cursor to 0 < BUFFER_SIZE, so this
                // branch cannot be taken on the next iteration; the retry
                // is bounded.
                self.refill()?;
                continue;
            }

            // The last refill came up short and its bytes are consumed.
            self.end_reached = true;
            return Ok(None);
        }
    }

    /// Pull bytes up to the next newline or end-of-stream.
    ///
    /// At most `capacity - 1` pulls are made; the newline must fall within
    /// them. The newline is consumed but not stored. End-of-stream mid-line
    /// yields the bytes collected so far (possibly an empty line when the
    /// stream ends exactly at a line boundary); the call after that returns
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`OxioError::InvalidArgument`] when `capacity` is zero;
    /// [`OxioError::LineTooLong`] when no newline or end-of-stream occurs
    /// within `capacity - 1` pulls — nothing is returned, though the pulled
    /// bytes have been consumed from the source.
    pub fn next_line(&mut self, capacity: usize) -> Result<Option<TextBuf>> {
        if capacity == 0 {
            return Err(OxioError::invalid_argument("line capacity must be at least 1"));
        }

        if self.end_reached {
            return Ok(None);
        }

        let mut line = TextBuf::with_capacity(capacity);
        for _ in 0..capacity - 1 {
            match self.next_byte()? {
                Some(b'\n') | None => return Ok(Some(line)),
                Some(byte) => {
                    line.push(byte)
                        .expect("at most capacity - 1 bytes are pushed");
                }
            }
        }

        Err(OxioError::line_too_long(capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    /// Source that reports end-of-input once and errors on any read after
    /// that, to prove the latch stops all source traffic.
    struct PoisonAfterEof {
        data: Cursor<Vec<u8>>,
        eof_delivered: bool,
    }

    impl PoisonAfterEof {
        fn new(data: Vec<u8>) -> Self {
            Self {
                data: Cursor::new(data),
                eof_delivered: false,
            }
        }
    }

    impl Read for PoisonAfterEof {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.eof_delivered {
                return Err(io::Error::other("source read after end-of-stream"));
            }

            let n = self.data.read(buf)?;
            if n == 0 {
                self.eof_delivered = true;
            }
            Ok(n)
        }
    }

    fn drain<R: Read>(reader: &mut BufferedReader<R>) -> Vec<u8> {
        let mut out = Vec::new();
        while let Some(byte) = reader.next_byte().unwrap() {
            out.push(byte);
        }
        out
    }

    #[test]
    fn test_next_byte_reproduces_source_exactly() {
        // Spans two full refills plus a short one.
        let data: Vec<u8> = (0..1300u32).map(|i| (i % 251) as u8).collect();
        let mut reader = BufferedReader::new(Cursor::new(data.clone()));

        assert_eq!(drain(&mut reader), data);
        assert!(reader.end_reached());
        assert_eq!(reader.next_byte().unwrap(), None);
        assert_eq!(reader.next_byte().unwrap(), None);
    }

    #[test]
    fn test_empty_source_latches_immediately() {
        let mut reader = BufferedReader::new(Cursor::new(Vec::new()));
        assert_eq!(reader.next_byte().unwrap(), None);
        assert!(reader.end_reached());
    }

    #[test]
    fn test_refill_denied_leaves_state_unchanged() {
        let data = vec![7u8; 100];
        let mut reader = BufferedReader::new(Cursor::new(data));

        assert_eq!(reader.next_byte().unwrap(), Some(7));

        let (position, valid, latched) =
            (reader.position(), reader.valid(), reader.end_reached());
        let buffer_snapshot = reader.buffer;

        assert_eq!(reader.refill().unwrap(), RefillStatus::Denied);
        assert_eq!(reader.position(), position);
        assert_eq!(reader.valid(), valid);
        assert_eq!(reader.end_reached(), latched);
        assert_eq!(reader.buffer, buffer_snapshot);
    }

    #[test]
    fn test_first_refill_allowed_and_resets_cursor() {
        let mut reader = BufferedReader::new(Cursor::new(vec![1u8, 2, 3]));
        assert_eq!(reader.position(), BUFFER_SIZE);

        assert_eq!(reader.refill().unwrap(), RefillStatus::Filled);
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.valid(), 3);
    }

    #[test]
    fn test_latch_stops_source_traffic_short_final_read() {
        // 700 bytes: one full refill, one short refill of 188.
        let data = vec![1u8; 700];
        let mut reader = BufferedReader::new(PoisonAfterEof::new(data));

        assert_eq!(drain(&mut reader).len(), 700);

        // The short refill (188 < BUFFER_SIZE) latched without a further
        // source read; every later call must stay away from the source.
        for _ in 0..5 {
            assert_eq!(reader.next_byte().unwrap(), None);
        }
        assert_eq!(reader.next_line(16).unwrap(), None);
    }

    #[test]
    fn test_latch_stops_source_traffic_exact_multiple() {
        // Exactly BUFFER_SIZE bytes: the second refill legitimately reads
        // the source once more and obtains zero; after that the latch must
        // hold with no third read.
        let data = vec![2u8; BUFFER_SIZE];
        let mut reader = BufferedReader::new(PoisonAfterEof::new(data));

        assert_eq!(drain(&mut reader).len(), BUFFER_SIZE);
        for _ in 0..5 {
            assert_eq!(reader.next_byte().unwrap(), None);
        }
    }

    #[test]
    fn test_next_line_sequence() {
        let mut reader = BufferedReader::new(Cursor::new(b"abc\ndef".to_vec()));

        assert_eq!(reader.next_line(10).unwrap().unwrap().as_bytes(), b"abc");
        assert_eq!(reader.next_line(10).unwrap().unwrap().as_bytes(), b"def");
        assert_eq!(reader.next_line(10).unwrap(), None);
    }

    #[test]
    fn test_next_line_too_long() {
        let mut reader = BufferedReader::new(Cursor::new(b"abcdef\n".to_vec()));

        let err = reader.next_line(3).unwrap_err();
        assert!(matches!(err, OxioError::LineTooLong { capacity: 3, .. }));
    }

    #[test]
    fn test_next_line_newline_must_fit_within_capacity() {
        // Capacity 4 admits three pulls; "abc" consumes them all without
        // reaching the newline.
        let mut reader = BufferedReader::new(Cursor::new(b"abc\n".to_vec()));
        assert!(matches!(
            reader.next_line(4),
            Err(OxioError::LineTooLong { .. })
        ));

        // One more slot and the newline lands inside the budget.
        let mut reader = BufferedReader::new(Cursor::new(b"abc\n".to_vec()));
        assert_eq!(reader.next_line(5).unwrap().unwrap().as_bytes(), b"abc");
    }

    #[test]
    fn test_next_line_empty_source_yields_one_empty_line() {
        let mut reader = BufferedReader::new(Cursor::new(Vec::new()));

        let line = reader.next_line(8).unwrap().unwrap();
        assert!(line.is_empty());
        assert_eq!(reader.next_line(8).unwrap(), None);
    }

    #[test]
    fn test_next_line_zero_capacity() {
        let mut reader = BufferedReader::new(Cursor::new(b"x".to_vec()));
        assert!(matches!(
            reader.next_line(0),
            Err(OxioError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_line_spanning_refill_boundary() {
        let mut data = vec![b'x'; 520];
        data.push(b'\n');
        data.extend_from_slice(b"tail\n");
        let mut reader = BufferedReader::new(Cursor::new(data));

        let line = reader.next_line(1024).unwrap().unwrap();
        assert_eq!(line.len(), 520);
        assert_eq!(reader.next_line(16).unwrap().unwrap().as_bytes(), b"tail");
    }
}
