//! # oxio Text
//!
//! String primitives for the oxio I/O library.
//!
//! This crate provides the text-handling building blocks the I/O layer is
//! built on:
//!
//! - [`buffer`]: `TextBuf`, a bounded-capacity byte buffer that carries its
//!   own length
//! - [`terminated`]: scans over marker-terminated byte strings with an
//!   explicit terminator byte per call
//! - [`number`]: decimal rendering of signed integers
//! - [`classify`]: character classification for the Windows-1251 single-byte
//!   encoding
//!
//! ## Termination markers
//!
//! Legacy callers delimit strings with a configurable terminator byte
//! (historically a process-wide global, `'\0'` by default). Here the marker
//! is an explicit argument to every operation that needs one, so two call
//! sites can use different markers without sharing state:
//!
//! ```rust
//! use oxio_text::terminated::{self, DEFAULT_MARKER};
//!
//! let s = b"hello\0garbage";
//! assert_eq!(terminated::length(s, DEFAULT_MARKER), 5);
//! assert_eq!(terminated::length(b"hello;rest", b';'), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod buffer;
pub mod classify;
pub mod error;
pub mod number;
pub mod terminated;

pub use buffer::TextBuf;
pub use error::{Result, TextError};
pub use terminated::DEFAULT_MARKER;
