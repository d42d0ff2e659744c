//! Bounded text buffer.
//!
//! `TextBuf` replaces the raw caller-managed `char[]` line buffers of the
//! legacy interface. It carries its own length, so the destination-capacity
//! overruns inherent in unchecked concatenation cannot happen, while still
//! exposing the capacity-limited contract those fixed-size line buffers had:
//! a buffer created with capacity `n` stores at most `n - 1` payload bytes,
//! with one slot reserved for a terminator should the contents ever be
//! handed to a marker-terminated consumer.

use crate::error::{Result, TextError};

/// A fixed-capacity byte buffer that carries its own length.
///
/// Capacity accounting matches the legacy `maxLength` convention: the final
/// slot is reserved for the termination marker, so `with_capacity(n)` holds
/// at most `n - 1` bytes of payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuf {
    /// Stored payload bytes (never includes a terminator).
    bytes: Vec<u8>,
    /// Total capacity, including the reserved terminator slot.
    capacity: usize,
}

impl TextBuf {
    /// Create a buffer with the given total capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero: a zero-capacity buffer cannot even
    /// hold a terminator.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");

        Self {
            bytes: Vec::with_capacity(capacity - 1),
            capacity,
        }
    }

    /// Create a buffer holding a copy of `bytes`, sized exactly to fit.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            capacity: bytes.len() + 1,
        }
    }

    /// Total capacity, including the reserved terminator slot.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of payload bytes stored.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the buffer holds no payload bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Payload bytes that can still be pushed.
    pub fn remaining(&self) -> usize {
        (self.capacity - 1) - self.bytes.len()
    }

    /// Check if another `push` would fail.
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// Append a single byte.
    ///
    /// Fails with [`TextError::BufferFull`] once `capacity - 1` payload
    /// bytes are stored; the buffer is left unchanged.
    pub fn push(&mut self, byte: u8) -> Result<()> {
        if self.is_full() {
            return Err(TextError::buffer_full(self.capacity));
        }

        self.bytes.push(byte);
        Ok(())
    }

    /// Append all payload bytes of `other`.
    ///
    /// Fails with [`TextError::DestinationTooSmall`] if the combined payload
    /// would not fit; the buffer is left unchanged on failure.
    pub fn append(&mut self, other: &TextBuf) -> Result<()> {
        self.push_bytes(other.as_bytes())
    }

    /// Append a byte slice.
    ///
    /// Fails with [`TextError::DestinationTooSmall`] if the slice does not
    /// fit; the buffer is left unchanged on failure.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > self.remaining() {
            return Err(TextError::destination_too_small(
                self.bytes.len() + bytes.len(),
                self.capacity - 1,
            ));
        }

        self.bytes.extend_from_slice(bytes);
        Ok(())
    }

    /// The payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The payload as UTF-8 text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// Copy the payload followed by `marker` into a new vector, for handing
    /// to marker-terminated consumers.
    pub fn to_terminated(&self, marker: u8) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.bytes.len() + 1);
        out.extend_from_slice(&self.bytes);
        out.push(marker);
        out
    }

    /// Remove all payload bytes, keeping the capacity.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

impl std::fmt::Display for TextBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

impl AsRef<[u8]> for TextBuf {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
