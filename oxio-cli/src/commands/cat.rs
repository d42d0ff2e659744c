//! Cat command implementation.

use oxio_core::{ByteSink, Console, Handle, OpenMode};
use std::path::Path;

/// Stream `file` to stdout line by line through the read-ahead buffer.
///
/// `width` is the per-line capacity; a line that does not terminate within
/// it aborts the command, matching the hard line-length limit of the
/// library.
pub fn cmd_cat(file: &Path, width: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut handle = Handle::open(file, OpenMode::Read)?;
    let mut console = Console::new();

    while let Some(line) = handle.next_line(width)? {
        console.write_line(&line.to_string())?;
    }

    handle.close();
    Ok(())
}
