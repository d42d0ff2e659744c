//! Scans over marker-terminated byte strings.
//!
//! Legacy callers delimit strings with a terminator byte rather than a
//! carried length. Every function here takes that marker explicitly; there
//! is no process-wide terminator state. The end of the slice always bounds
//! the scan, so a string that lost its marker cannot run off its storage.

use std::cmp::Ordering;

use crate::error::{Result, TextError};

/// The conventional terminator byte, matching C's `'\0'`.
pub const DEFAULT_MARKER: u8 = 0;

/// Payload length of `s`: the number of bytes before the first `marker`.
///
/// The slice end bounds the scan, so an unterminated string reports its
/// full slice length.
pub fn length(s: &[u8], marker: u8) -> usize {
    s.iter().position(|&b| b == marker).unwrap_or(s.len())
}

/// The payload of `s`: everything before the first `marker`.
pub fn payload(s: &[u8], marker: u8) -> &[u8] {
    &s[..length(s, marker)]
}

/// Compare the payloads of `a` and `b` by unsigned byte value.
pub fn compare(a: &[u8], b: &[u8], marker: u8) -> Ordering {
    payload(a, marker).cmp(payload(b, marker))
}

/// Append the payload of `src` after the payload of `dest`, writing a
/// fresh `marker` after the combined contents.
///
/// Fails with [`TextError::DestinationTooSmall`] when `dest` cannot hold
/// both payloads plus the marker; `dest` is unchanged on failure.
///
/// Returns the combined payload length.
pub fn concatenate(dest: &mut [u8], src: &[u8], marker: u8) -> Result<usize> {
    let dest_len = length(dest, marker);
    let src_payload = payload(src, marker);
    let combined = dest_len + src_payload.len();

    // One slot after the combined payload must remain for the marker.
    if combined + 1 > dest.len() {
        return Err(TextError::destination_too_small(combined, dest.len().saturating_sub(1)));
    }

    dest[dest_len..combined].copy_from_slice(src_payload);
    dest[combined] = marker;

    Ok(combined)
}

/// Find the first occurrence of the payload of `needle` within the payload
/// of `haystack`. Returns the starting index.
///
/// An empty needle matches at index 0.
pub fn find(haystack: &[u8], needle: &[u8], marker: u8) -> Option<usize> {
    find_within(haystack, needle, usize::MAX, marker)
}

/// Like [`find`], but examines at most `max_symbols` bytes of `haystack`.
///
/// The match must be complete within the first `max_symbols` bytes.
pub fn find_within(
    haystack: &[u8],
    needle: &[u8],
    max_symbols: usize,
    marker: u8,
) -> Option<usize> {
    let hay = payload(haystack, marker);
    let hay = &hay[..hay.len().min(max_symbols)];
    let pat = payload(needle, marker);

    if pat.is_empty() {
        return Some(0);
    }
    if pat.len() > hay.len() {
        return None;
    }

    hay.windows(pat.len()).position(|window| window == pat)
}

/// Count occurrences of `symbol` in the payload of `s`.
pub fn count_occurrences(s: &[u8], symbol: u8, marker: u8) -> usize {
    count_occurrences_within(s, symbol, usize::MAX, marker)
}

/// Like [`count_occurrences`], but examines at most `max_symbols` bytes.
pub fn count_occurrences_within(s: &[u8], symbol: u8, max_symbols: usize, marker: u8) -> usize {
    let scan = payload(s, marker);
    let scan = &scan[..scan.len().min(max_symbols)];
    scan.iter().filter(|&&b| b == symbol).count()
}
