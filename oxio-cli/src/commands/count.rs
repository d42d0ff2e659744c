//! Count command implementation.

use oxio_core::{Arg, Console, Handle, OpenMode};
use oxio_text::terminated;
use std::path::Path;

/// Line capacity used while scanning.
const LINE_CAPACITY: usize = 4096;

/// Count occurrences of `symbol` in `file`, optionally examining at most
/// `limit` bytes of each line.
pub fn cmd_count(
    file: &Path,
    symbol: char,
    limit: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !symbol.is_ascii() {
        return Err("symbol must be a single ASCII character".into());
    }
    let symbol = symbol as u8;

    let mut handle = Handle::open(file, OpenMode::Read)?;
    let mut total = 0usize;

    while let Some(line) = handle.next_line(LINE_CAPACITY)? {
        // Lines from next_line carry their length, so any marker byte
        // works; the slice end bounds the scan.
        total += match limit {
            Some(max) => terminated::count_occurrences_within(
                line.as_bytes(),
                symbol,
                max,
                terminated::DEFAULT_MARKER,
            ),
            None => terminated::count_occurrences(line.as_bytes(), symbol, terminated::DEFAULT_MARKER),
        };
    }
    handle.close();

    let mut console = Console::new();
    console.write_formatted(
        "%c occurs %d times\n",
        &[
            Arg::Char(symbol),
            Arg::Int(i32::try_from(total).unwrap_or(i32::MAX)),
        ],
    )?;

    Ok(())
}
