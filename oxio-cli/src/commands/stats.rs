//! Stats command implementation.

use oxio_core::{Arg, Console, Handle, OpenMode};
use oxio_text::classify;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSON-serializable tallies for one file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FileStats {
    file: String,
    bytes: usize,
    lines: usize,
    latin_letters: usize,
    cyrillic_letters: usize,
    punctuation: usize,
}

/// Tally lines, bytes, and Windows-1251 character classes in `file`.
pub fn cmd_stats(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut handle = Handle::open(file, OpenMode::Read)?;
    let mut stats = FileStats {
        file: file.display().to_string(),
        ..FileStats::default()
    };

    while let Some(byte) = handle.next_byte()? {
        stats.bytes += 1;
        if byte == b'\n' {
            stats.lines += 1;
        }
        if classify::is_latin_letter(byte) {
            stats.latin_letters += 1;
        } else if classify::is_cyrillic_letter(byte) {
            stats.cyrillic_letters += 1;
        } else if classify::is_punctuation(byte) {
            stats.punctuation += 1;
        }
    }
    handle.close();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let mut console = Console::new();
    console.write_formatted("Stats for %s\n", &[Arg::Text(&stats.file)])?;
    for (label, value) in [
        ("bytes", stats.bytes),
        ("lines", stats.lines),
        ("latin letters", stats.latin_letters),
        ("cyrillic letters", stats.cyrillic_letters),
        ("punctuation", stats.punctuation),
    ] {
        console.write_formatted(
            "  %s: %d\n",
            &[
                Arg::Text(label),
                Arg::Int(i32::try_from(value).unwrap_or(i32::MAX)),
            ],
        )?;
    }

    Ok(())
}
