//! Minimal `%c`/`%d`/`%s` substitution writer.
//!
//! The format string is scanned byte by byte. Each recognized specifier
//! consumes the next argument, which must carry the matching tag — the
//! typed, ordered [`Arg`] sequence replaces the unchecked variadic lists of
//! the legacy interface while keeping its "order must match the
//! specifiers" contract. Any other byte after `%` is passed through
//! verbatim (both bytes), and a lone `%` at the end of the string is
//! written as-is.
//!
//! Output goes through the write path one byte at a time; the first failed
//! write abandons the remainder of the format string.

use oxio_text::number::render_int;

use crate::error::{OxioError, Result};
use crate::sink::ByteSink;

/// A formatter argument, tagged with the specifier it satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// Satisfies `%c`.
    Char(u8),
    /// Satisfies `%d`.
    Int(i32),
    /// Satisfies `%s`.
    Text(&'a str),
}

/// Write `fmt` to `sink`, substituting `args` for `%c`/`%d`/`%s`.
///
/// Returns the number of substitutions performed.
///
/// # Errors
///
/// [`OxioError::InvalidArgument`] when a specifier finds no remaining
/// argument or an argument of the wrong tag; any sink failure is surfaced
/// as-is. In both cases everything already written stays written.
pub fn write_formatted<S: ByteSink>(sink: &mut S, fmt: &str, args: &[Arg<'_>]) -> Result<usize> {
    let bytes = fmt.as_bytes();
    let mut args = args.iter();
    let mut substituted = 0;

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' || i + 1 == bytes.len() {
            sink.write_byte(bytes[i])?;
            i += 1;
            continue;
        }

        let spec = bytes[i + 1];
        match spec {
            b'c' => match args.next() {
                Some(Arg::Char(ch)) => sink.write_byte(*ch)?,
                other => return Err(mismatch("%c", other)),
            },
            b'd' => match args.next() {
                Some(Arg::Int(value)) => {
                    for byte in render_int(*value).as_bytes() {
                        sink.write_byte(*byte)?;
                    }
                }
                other => return Err(mismatch("%d", other)),
            },
            b's' => match args.next() {
                Some(Arg::Text(text)) => sink.write_str(text)?,
                other => return Err(mismatch("%s", other)),
            },
            _ => {
                // Unrecognized specifier: both bytes pass through, no
                // argument consumed, no substitution counted.
                sink.write_byte(b'%')?;
                sink.write_byte(spec)?;
                i += 2;
                continue;
            }
        }

        substituted += 1;
        i += 2;
    }

    Ok(substituted)
}

fn mismatch(spec: &str, arg: Option<&Arg<'_>>) -> OxioError {
    match arg {
        Some(arg) => {
            OxioError::invalid_argument(format!("specifier {spec} cannot consume {arg:?}"))
        }
        None => OxioError::invalid_argument(format!(
            "specifier {spec} has no remaining argument to consume"
        )),
    }
}
