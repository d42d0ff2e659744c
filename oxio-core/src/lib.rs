//! # oxio Core
//!
//! Buffered file and console I/O with explicit control over buffering and
//! string-termination semantics.
//!
//! The heart of the crate is the read path: a fixed 512-byte read-ahead
//! buffer with a strict refill protocol and a one-way end-of-stream latch,
//! plus the character/line extraction built strictly on its contract.
//! Writers bypass buffering entirely and fail fast, one byte at a time.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Extraction                                              │
//! │     next_byte / next_line, token reader, formatter      │
//! ├─────────────────────────────────────────────────────────┤
//! │ Buffered Reader (this crate's core)                     │
//! │     512-byte staging buffer, refill, end-of-stream latch│
//! ├─────────────────────────────────────────────────────────┤
//! │ Sinks and sources                                       │
//! │     Handle (file), Console (stdout/stdin), ByteSink     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use oxio_core::{Arg, Handle, OpenMode};
//!
//! # fn main() -> oxio_core::Result<()> {
//! let mut out = Handle::open("greeting.txt", OpenMode::Write)?;
//! out.write_formatted("%s #%d%c", &[Arg::Text("hello"), Arg::Int(1), Arg::Char(b'\n')])?;
//! out.close();
//!
//! let mut input = Handle::open("greeting.txt", OpenMode::Read)?;
//! while let Some(line) = input.next_line(256)? {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod buffered;
pub mod console;
pub mod error;
pub mod format;
pub mod handle;
pub mod sink;

pub use buffered::{BUFFER_SIZE, BufferedReader, RefillStatus};
pub use console::Console;
pub use error::{OxioError, Result};
pub use format::{Arg, write_formatted};
pub use handle::{Handle, OpenMode};
pub use sink::ByteSink;
