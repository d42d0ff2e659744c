//! Decimal rendering of signed integers.
//!
//! Digits are produced most-significant-first by repeated power-of-ten
//! division, with a leading `-` for negative values. No locale handling,
//! no digit grouping.

use crate::buffer::TextBuf;

/// Widest possible rendering: sign plus ten digits (`-2147483648`),
/// plus the reserved terminator slot.
const RENDER_CAPACITY: usize = 12;

/// Number of decimal digits in `value`, not counting the sign.
///
/// Zero has one digit.
pub fn digit_count(value: i32) -> usize {
    let mut magnitude = value.unsigned_abs();
    let mut digits = 1;
    while magnitude >= 10 {
        magnitude /= 10;
        digits += 1;
    }

    digits
}

/// Render `value` as decimal text.
///
/// Correct across the full `i32` range; `i32::MIN` is handled through the
/// unsigned magnitude, which cannot overflow on negation.
pub fn render_int(value: i32) -> TextBuf {
    let mut out = TextBuf::with_capacity(RENDER_CAPACITY);
    let magnitude = value.unsigned_abs();
    let digits = digit_count(value);

    if value < 0 {
        out.push(b'-').expect("capacity covers sign and ten digits");
    }

    let mut tens_power = 10u32.pow(digits as u32 - 1);
    while tens_power >= 1 {
        let digit = (magnitude / tens_power) % 10;
        out.push(b'0' + digit as u8)
            .expect("capacity covers sign and ten digits");

        if tens_power == 1 {
            break;
        }
        tens_power /= 10;
    }

    out
}
