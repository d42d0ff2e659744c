//! Error types for text operations.

use thiserror::Error;

/// The error type for bounded text operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// A `TextBuf` has no room left for another payload byte.
    #[error("text buffer full: capacity {capacity} holds at most {max_payload} payload bytes")]
    BufferFull {
        /// Total buffer capacity, including the reserved terminator slot.
        capacity: usize,
        /// Maximum payload, always `capacity - 1`.
        max_payload: usize,
    },

    /// A destination slice cannot hold the result plus its terminator.
    #[error("destination too small: need {needed} bytes plus terminator, have {available}")]
    DestinationTooSmall {
        /// Payload bytes the operation would produce.
        needed: usize,
        /// Bytes available in the destination.
        available: usize,
    },
}

/// Result type alias for text operations.
pub type Result<T> = std::result::Result<T, TextError>;

impl TextError {
    /// Create a buffer-full error for a buffer of the given capacity.
    pub fn buffer_full(capacity: usize) -> Self {
        Self::BufferFull {
            capacity,
            max_payload: capacity.saturating_sub(1),
        }
    }

    /// Create a destination-too-small error.
    pub fn destination_too_small(needed: usize, available: usize) -> Self {
        Self::DestinationTooSmall { needed, available }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TextError::buffer_full(8);
        assert!(err.to_string().contains("capacity 8"));

        let err = TextError::destination_too_small(10, 4);
        assert!(err.to_string().contains("need 10"));
    }
}
