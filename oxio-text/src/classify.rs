//! Character classification for the Windows-1251 single-byte encoding.
//!
//! The legacy tables classified raw bytes against hard-coded ranges of an
//! unstated single-byte codepage. That codepage is Windows-1251: Cyrillic
//! А..Я occupies `0xC0..=0xDF` and а..я occupies `0xE0..=0xFF`. Here each
//! byte is decoded to its Unicode codepoint via [`encoding_rs::WINDOWS_1251`]
//! and classified on the codepoint, which makes the encoding explicit
//! instead of implicit in magic byte values.
//!
//! [`is_punctuation`] is the exception: its ranges cover symbols, digits,
//! and codepage-specific typographic bytes with no clean Unicode category
//! equivalent, so the original byte ranges are kept verbatim and documented
//! as encoding-specific.

use encoding_rs::WINDOWS_1251;

/// Decode a single Windows-1251 byte to its Unicode codepoint.
///
/// The one unmapped byte (`0x98`) decodes to U+FFFD.
pub fn decode_byte(byte: u8) -> char {
    let bytes = [byte];
    let (text, _, _) = WINDOWS_1251.decode(&bytes);
    text.chars().next().unwrap_or('\u{FFFD}')
}

/// Check if `byte` is an ASCII Latin letter (`a..z`, `A..Z`).
pub fn is_latin_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Check if `byte` is a Windows-1251 Cyrillic letter (А..Я, а..я).
///
/// Ё and ё live outside the contiguous alphabet block in Windows-1251
/// (`0xA8`/`0xB8`) and are not matched, same as the legacy tables.
pub fn is_cyrillic_letter(byte: u8) -> bool {
    matches!(decode_byte(byte), 'А'..='я')
}

/// Check if `byte` is a punctuation mark in the legacy sense.
///
/// Encoding-specific: these are the original Windows-1251 byte ranges,
/// which also cover ASCII digits and the codepage's typographic symbols
/// up to `0xBF`. Kept byte-for-byte for compatibility with legacy data.
pub fn is_punctuation(byte: u8) -> bool {
    matches!(byte, b' '..=b'@' | b'['..=b'`' | b'{'..=0xBF)
}

/// Lower-case `byte` if it is an upper-case ASCII or Windows-1251
/// Cyrillic letter; any other byte passes through unchanged.
pub fn to_lower(byte: u8) -> u8 {
    if byte.is_ascii_uppercase() {
        return byte + (b'a' - b'A');
    }

    // А..Я (0xC0..=0xDF) maps to а..я (0xE0..=0xFF) by a 0x20 offset.
    if (0xC0..=0xDF).contains(&byte) {
        return byte + 0x20;
    }

    byte
}
