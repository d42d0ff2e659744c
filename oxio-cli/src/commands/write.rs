//! Write command implementation.

use oxio_core::{Arg, ByteSink, Console, Handle, OpenMode};
use std::path::Path;

/// Write `lines` to `file` through the unbuffered write path.
pub fn cmd_write(
    file: &Path,
    append: bool,
    lines: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if append {
        OpenMode::Append
    } else {
        OpenMode::Write
    };

    let mut handle = Handle::open(file, mode)?;
    for line in lines {
        handle.write_line(line)?;
    }
    handle.close();

    let path = file.display().to_string();
    let mut console = Console::new();
    console.write_formatted(
        "wrote %d lines to %s\n",
        &[
            Arg::Int(i32::try_from(lines.len()).unwrap_or(i32::MAX)),
            Arg::Text(&path),
        ],
    )?;

    Ok(())
}
