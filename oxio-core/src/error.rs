//! Error types for oxio I/O operations.
//!
//! Every fallible operation in this crate reports one of these variants
//! synchronously. There is no retry logic behind any of them; the single
//! bounded refill-then-retry inside the buffered reader is the only place
//! a failure path re-attempts anything.

use std::io;
use thiserror::Error;

use crate::handle::OpenMode;

/// The main error type for oxio operations.
#[derive(Debug, Error)]
pub enum OxioError {
    /// I/O error from the underlying file or stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source is exhausted and the requested amount could not be served.
    #[error("end of stream")]
    EndOfStream,

    /// The handle was opened in a mode that does not support the operation.
    #[error("handle opened for {actual}, operation requires {required}")]
    WrongMode {
        /// Mode the operation needs.
        required: &'static str,
        /// Mode the handle was opened with.
        actual: OpenMode,
    },

    /// A caller-supplied argument is unusable.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the problem.
        message: String,
    },

    /// A line did not terminate within the caller's capacity.
    #[error("line exceeds capacity {capacity} (at most {max} bytes before the newline)")]
    LineTooLong {
        /// The capacity the caller supplied.
        capacity: usize,
        /// Longest line that capacity can hold.
        max: usize,
    },
}

/// Result type alias for oxio operations.
pub type Result<T> = std::result::Result<T, OxioError>;

impl OxioError {
    /// Create a wrong-mode error.
    pub fn wrong_mode(required: &'static str, actual: OpenMode) -> Self {
        Self::WrongMode { required, actual }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a line-too-long error for the given capacity.
    ///
    /// A capacity of `n` admits at most `n - 1` pulls, the last of which
    /// must be the newline, so the longest representable line is `n - 2`
    /// bytes.
    pub fn line_too_long(capacity: usize) -> Self {
        Self::LineTooLong {
            capacity,
            max: capacity.saturating_sub(2),
        }
    }
}
