//! File-backed integration tests for `Handle`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use oxio_core::{Arg, BUFFER_SIZE, ByteSink, Handle, OpenMode, OxioError};

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Unique temp file path, removed on drop.
struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "oxio-test-{}-{}-{}",
            std::process::id(),
            tag,
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn read_mode_on_missing_file_fails() {
    let tmp = TempFile::new("missing");
    assert!(matches!(
        Handle::open(tmp.path(), OpenMode::Read),
        Err(OxioError::Io(_))
    ));
}

#[test]
fn write_mode_creates_and_truncates() {
    let tmp = TempFile::new("truncate");
    fs::write(tmp.path(), b"previous contents").unwrap();

    let mut handle = Handle::open(tmp.path(), OpenMode::Write).unwrap();
    handle.write_str("new").unwrap();
    handle.close();

    assert_eq!(fs::read(tmp.path()).unwrap(), b"new");
}

#[test]
fn append_mode_preserves_contents() {
    let tmp = TempFile::new("append");
    fs::write(tmp.path(), b"first|").unwrap();

    let mut handle = Handle::open(tmp.path(), OpenMode::Append).unwrap();
    handle.write_str("second").unwrap();
    handle.close();

    assert_eq!(fs::read(tmp.path()).unwrap(), b"first|second");
}

#[test]
fn next_byte_streams_file_in_order() {
    let tmp = TempFile::new("stream");
    let data: Vec<u8> = (0..2000u32).map(|i| (i % 241) as u8).collect();
    fs::write(tmp.path(), &data).unwrap();

    let mut handle = Handle::open(tmp.path(), OpenMode::Read).unwrap();
    let mut seen = Vec::new();
    while let Some(byte) = handle.next_byte().unwrap() {
        seen.push(byte);
    }

    assert_eq!(seen, data);
    assert_eq!(handle.next_byte().unwrap(), None, "latch is permanent");
}

#[test]
fn next_line_sequence_then_end_of_stream() {
    let tmp = TempFile::new("lines");
    fs::write(tmp.path(), b"abc\ndef").unwrap();

    let mut handle = Handle::open(tmp.path(), OpenMode::Read).unwrap();
    assert_eq!(handle.next_line(10).unwrap().unwrap().as_bytes(), b"abc");
    assert_eq!(handle.next_line(10).unwrap().unwrap().as_bytes(), b"def");
    assert_eq!(handle.next_line(10).unwrap(), None);
}

#[test]
fn next_line_capacity_exceeded() {
    let tmp = TempFile::new("longline");
    fs::write(tmp.path(), b"abcdef\n").unwrap();

    let mut handle = Handle::open(tmp.path(), OpenMode::Read).unwrap();
    assert!(matches!(
        handle.next_line(3),
        Err(OxioError::LineTooLong { .. })
    ));
}

#[test]
fn block_round_trip_across_buffer_boundary_sizes() {
    for n in [0usize, 1, BUFFER_SIZE - 1, BUFFER_SIZE, BUFFER_SIZE + 1] {
        let tmp = TempFile::new("roundtrip");
        let data: Vec<u8> = (0..n).map(|i| (i % 251) as u8).collect();

        let mut writer = Handle::open(tmp.path(), OpenMode::Write).unwrap();
        assert_eq!(writer.write_block(&data, 1, n).unwrap(), n);
        writer.close();

        let mut reader = Handle::open(tmp.path(), OpenMode::Read).unwrap();
        let mut back = vec![0u8; n];
        assert_eq!(reader.read_block(&mut back, 1, n).unwrap(), n);
        assert_eq!(back, data, "round trip of {n} bytes");
    }
}

#[test]
fn block_transfer_with_wider_elements() {
    let tmp = TempFile::new("elements");
    let data: Vec<u8> = (0..24u8).collect();

    let mut writer = Handle::open(tmp.path(), OpenMode::Write).unwrap();
    assert_eq!(writer.write_block(&data, 4, 6).unwrap(), 6);
    writer.close();

    let mut reader = Handle::open(tmp.path(), OpenMode::Read).unwrap();
    let mut back = [0u8; 24];
    assert_eq!(reader.read_block(&mut back, 8, 3).unwrap(), 3);
    assert_eq!(&back[..], &data[..]);
}

#[test]
fn read_block_is_all_or_nothing() {
    let tmp = TempFile::new("short");
    fs::write(tmp.path(), b"12345").unwrap();

    let mut reader = Handle::open(tmp.path(), OpenMode::Read).unwrap();
    let mut buf = [0u8; 8];
    assert!(matches!(
        reader.read_block(&mut buf, 1, 8),
        Err(OxioError::EndOfStream)
    ));
}

#[test]
fn mode_mismatch_is_rejected() {
    let tmp = TempFile::new("modes");
    fs::write(tmp.path(), b"data").unwrap();

    let mut reader = Handle::open(tmp.path(), OpenMode::Read).unwrap();
    assert!(matches!(
        reader.write_byte(b'x'),
        Err(OxioError::WrongMode { .. })
    ));
    let mut block = [0u8; 4];
    assert!(matches!(
        reader.write_block(&block, 1, 4),
        Err(OxioError::WrongMode { .. })
    ));

    let mut writer = Handle::open(tmp.path(), OpenMode::Append).unwrap();
    assert!(matches!(
        writer.next_byte(),
        Err(OxioError::WrongMode { .. })
    ));
    assert!(matches!(
        writer.next_line(8),
        Err(OxioError::WrongMode { .. })
    ));
    assert!(matches!(
        writer.refill(),
        Err(OxioError::WrongMode { .. })
    ));
    assert!(matches!(
        writer.read_block(&mut block, 1, 4),
        Err(OxioError::WrongMode { .. })
    ));
}

#[test]
fn formatted_write_then_read_back() {
    let tmp = TempFile::new("format");

    let mut writer = Handle::open(tmp.path(), OpenMode::Write).unwrap();
    let n = writer
        .write_formatted(
            "%s line %d%c",
            &[Arg::Text("log"), Arg::Int(-7), Arg::Char(b'\n')],
        )
        .unwrap();
    assert_eq!(n, 3);
    writer.write_line("tail").unwrap();
    writer.close();

    let mut reader = Handle::open(tmp.path(), OpenMode::Read).unwrap();
    assert_eq!(
        reader.next_line(64).unwrap().unwrap().as_bytes(),
        b"log line -7"
    );
    assert_eq!(reader.next_line(64).unwrap().unwrap().as_bytes(), b"tail");
    assert_eq!(reader.next_line(64).unwrap(), None);
}
