//! File handles.
//!
//! A [`Handle`] binds an OS file to one of three modes fixed at creation.
//! Read mode stages bytes through a [`BufferedReader`]; write and append
//! modes hold the bare file and bypass buffering entirely. The file is
//! exclusively owned by its handle and released when the handle is dropped
//! or explicitly [`close`](Handle::close)d — move semantics make post-close
//! use unrepresentable.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use oxio_text::TextBuf;

use crate::buffered::{BufferedReader, RefillStatus};
use crate::error::{OxioError, Result};
use crate::format::{self, Arg};
use crate::sink::ByteSink;

/// Access mode of a [`Handle`], fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Read-only; opening a nonexistent file fails.
    Read,
    /// Write-only; creates the file, truncating previous contents.
    Write,
    /// Write-only; creates the file, preserving previous contents.
    Append,
}

impl OpenMode {
    /// Check if the mode permits write operations.
    pub fn is_writable(self) -> bool {
        matches!(self, OpenMode::Write | OpenMode::Append)
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpenMode::Read => "read",
            OpenMode::Write => "write",
            OpenMode::Append => "append",
        };
        write!(f, "{name}")
    }
}

/// Mode-specific backing storage. Writers carry no buffer state at all.
#[derive(Debug)]
enum Backing {
    Read(BufferedReader<File>),
    Write(File),
}

/// An open, mode-bound file.
#[derive(Debug)]
pub struct Handle {
    mode: OpenMode,
    backing: Backing,
}

impl Handle {
    /// Open `path` in the given mode.
    ///
    /// Read mode fails if the file does not exist. Write and Append create
    /// it; Write truncates existing contents, Append preserves them.
    pub fn open(path: impl AsRef<Path>, mode: OpenMode) -> Result<Self> {
        let backing = match mode {
            OpenMode::Read => Backing::Read(BufferedReader::new(File::open(path)?)),
            OpenMode::Write => Backing::Write(
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)?,
            ),
            OpenMode::Append => {
                Backing::Write(OpenOptions::new().append(true).create(true).open(path)?)
            }
        };

        Ok(Self { mode, backing })
    }

    /// The mode this handle was opened with.
    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Release the file. Dropping the handle has the same effect; this
    /// makes the release point explicit on deliberate exit paths.
    pub fn close(self) {}

    fn reader(&mut self) -> Result<&mut BufferedReader<File>> {
        match &mut self.backing {
            Backing::Read(reader) => Ok(reader),
            Backing::Write(_) => Err(OxioError::wrong_mode("read", self.mode)),
        }
    }

    fn writer(&mut self) -> Result<&mut File> {
        match &mut self.backing {
            Backing::Write(file) => Ok(file),
            Backing::Read(_) => Err(OxioError::wrong_mode("write or append", self.mode)),
        }
    }

    /// Request a buffer refill. See [`BufferedReader::refill`].
    pub fn refill(&mut self) -> Result<RefillStatus> {
        self.reader()?.refill()
    }

    /// Pull the next byte. See [`BufferedReader::next_byte`].
    pub fn next_byte(&mut self) -> Result<Option<u8>> {
        self.reader()?.next_byte()
    }

    /// Pull the next line. See [`BufferedReader::next_line`].
    pub fn next_line(&mut self, capacity: usize) -> Result<Option<TextBuf>> {
        self.reader()?.next_line(capacity)
    }

    /// Read `count` elements of `elem_size` bytes each into `buf`,
    /// bypassing the read-ahead buffer.
    ///
    /// All-or-nothing: if fewer than `count` full elements are available
    /// the call fails with [`OxioError::EndOfStream`] and no count is
    /// reported. Returns `count` on success.
    pub fn read_block(&mut self, buf: &mut [u8], elem_size: usize, count: usize) -> Result<usize> {
        let total = block_len(buf.len(), elem_size, count)?;

        let file = match &mut self.backing {
            Backing::Read(reader) => reader.get_mut(),
            Backing::Write(_) => return Err(OxioError::wrong_mode("read", self.mode)),
        };

        match file.read_exact(&mut buf[..total]) {
            Ok(()) => Ok(count),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(OxioError::EndOfStream),
            Err(e) => Err(e.into()),
        }
    }

    /// Write `count` elements of `elem_size` bytes each from `buf`.
    ///
    /// Fails fast; on error only the successfully-written prefix persists.
    /// Returns `count` on success.
    pub fn write_block(&mut self, buf: &[u8], elem_size: usize, count: usize) -> Result<usize> {
        let total = block_len(buf.len(), elem_size, count)?;

        self.writer()?.write_all(&buf[..total])?;
        Ok(count)
    }

    /// Write a formatted string. See [`format::write_formatted`].
    pub fn write_formatted(&mut self, fmt: &str, args: &[Arg<'_>]) -> Result<usize> {
        format::write_formatted(self, fmt, args)
    }
}

impl ByteSink for Handle {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.writer()?.write_all(&[byte])?;
        Ok(())
    }
}

/// Validate an `elem_size * count` transfer against the caller's slice.
fn block_len(available: usize, elem_size: usize, count: usize) -> Result<usize> {
    let total = elem_size
        .checked_mul(count)
        .ok_or_else(|| OxioError::invalid_argument("element size times count overflows"))?;

    if total > available {
        return Err(OxioError::invalid_argument(format!(
            "buffer of {available} bytes cannot hold {count} elements of {elem_size} bytes"
        )));
    }

    Ok(total)
}
