//! Decimal and hexadecimal digit emitters.
//!
//! Both fill a fixed stack buffer for exactly the word's capacity, whatever
//! the magnitude of the value, so the loop bound never depends on input.

use crate::sink::Sink;
use crate::word::Word;

/// Emit `value` in decimal, printing at least `minimum` digits.
///
/// Leading zeros are suppressed until the first non-zero digit or until only
/// `minimum` digit positions remain, whichever comes first. The last digit is
/// always printed, so zero renders as `"0"` with `minimum == 0`. A `minimum`
/// above [`Word::DEC_CAPACITY`] saturates at the capacity.
///
/// Returns the number of characters emitted.
pub fn emit_decimal<W: Word, S: Sink + ?Sized>(sink: &mut S, value: W, minimum: usize) -> usize {
    let mut scratch = <W::DecDigits as Default>::default();
    let digits = scratch.as_mut();
    let capacity = digits.len();

    let mut rest = value.widen();
    for slot in digits.iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }

    let forced_from = capacity.saturating_sub(minimum.max(1));
    let mut significant = false;
    let mut written = 0;
    for (pos, &digit) in digits.iter().enumerate() {
        if !significant {
            if digit == 0 && pos < forced_from {
                continue;
            }
            significant = true;
        }
        sink.put(b'0' + digit);
        written += 1;
    }
    written
}

/// Emit the low `digits` hex digits of `value`, uppercase, zero-padded.
///
/// `digits` is an exact count, not a minimum: no leading-zero suppression
/// happens. `digits == 0` emits nothing.
///
/// # Panics
///
/// Panics if `digits` exceeds [`Word::HEX_CAPACITY`]. The scanner clamps the
/// width before calling; direct callers must do the same.
pub fn emit_hex<W: Word, S: Sink + ?Sized>(sink: &mut S, value: W, digits: usize) -> usize {
    assert!(
        digits <= W::HEX_CAPACITY,
        "hex digit count {digits} exceeds word capacity {}",
        W::HEX_CAPACITY
    );

    let mut scratch = <W::HexDigits as Default>::default();
    let nibbles = scratch.as_mut();

    let mut rest = value.widen();
    for slot in nibbles.iter_mut().rev() {
        *slot = (rest & 0xF) as u8;
        rest >>= 4;
    }

    let mut written = 0;
    for &nibble in &nibbles[nibbles.len() - digits..] {
        sink.put(hex_char(nibble));
        written += 1;
    }
    written
}

#[inline]
const fn hex_char(nibble: u8) -> u8 {
    if nibble > 9 {
        nibble - 10 + b'A'
    } else {
        nibble + b'0'
    }
}
