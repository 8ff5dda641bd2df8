//! Fixed integer widths the engine can be instantiated for.
//!
//! The scratch buffers used by the converters are plain stack arrays whose
//! lengths are computed from the width's `MAX` and `BITS`, so a 16-bit build
//! carries a 5-slot decimal buffer and a 4-slot hex buffer, a 32-bit build
//! 10 and 8, and so on.

use core::fmt::Debug;

use crate::arg::Arg;

/// Word width used by [`smallprintf!`](crate::smallprintf).
pub type DefaultWord = u16;

/// Number of decimal digits needed to print `max`.
#[must_use]
pub const fn decimal_capacity(max: u64) -> usize {
    let mut digits = 1;
    let mut rest = max / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}

/// Number of hexadecimal digits needed to print a `bits`-wide value.
#[must_use]
pub const fn hex_capacity(bits: u32) -> usize {
    bits.div_ceil(4) as usize
}

mod sealed {
    pub trait Sealed {}
}

/// An unsigned fixed-width integer plus its signed counterpart.
///
/// Sealed: implemented for `u8`, `u16`, `u32` and `u64`.
pub trait Word: Copy + Eq + Ord + Default + Debug + sealed::Sealed {
    /// Signed integer of the same width, consumed by `%d`.
    type Signed: Copy + PartialEq + Debug;
    /// Decimal scratch buffer, `DEC_CAPACITY` slots.
    type DecDigits: AsRef<[u8]> + AsMut<[u8]> + Default;
    /// Hexadecimal scratch buffer, `HEX_CAPACITY` slots.
    type HexDigits: AsRef<[u8]> + AsMut<[u8]> + Default;

    const BITS: u32;
    /// Maximum decimal digits of an unsigned value.
    const DEC_CAPACITY: usize;
    /// Maximum hexadecimal digits of an unsigned value.
    const HEX_CAPACITY: usize;

    /// Zero-extend to 64 bits for digit extraction.
    fn widen(self) -> u64;

    /// Split a signed value into `(is_negative, magnitude)`.
    ///
    /// The magnitude of the most negative value is representable in the
    /// unsigned word, so `i16::MIN` yields `(true, 32768)`.
    fn sign_magnitude(value: Self::Signed) -> (bool, Self);
}

macro_rules! impl_word {
    ($($unsigned:ty => $signed:ty),* $(,)?) => {$(
        impl sealed::Sealed for $unsigned {}

        impl Word for $unsigned {
            type Signed = $signed;
            type DecDigits = [u8; decimal_capacity(<$unsigned>::MAX as u64)];
            type HexDigits = [u8; hex_capacity(<$unsigned>::BITS)];

            const BITS: u32 = <$unsigned>::BITS;
            const DEC_CAPACITY: usize = decimal_capacity(<$unsigned>::MAX as u64);
            const HEX_CAPACITY: usize = hex_capacity(<$unsigned>::BITS);

            #[inline]
            fn widen(self) -> u64 {
                self as u64
            }

            #[inline]
            fn sign_magnitude(value: $signed) -> (bool, Self) {
                (value < 0, value.unsigned_abs())
            }
        }

        impl<'a> From<$unsigned> for Arg<'a, $unsigned> {
            #[inline]
            fn from(value: $unsigned) -> Self {
                Arg::Unsigned(value)
            }
        }

        impl<'a> From<$signed> for Arg<'a, $unsigned> {
            #[inline]
            fn from(value: $signed) -> Self {
                Arg::Signed(value)
            }
        }
    )*};
}

impl_word!(u8 => i8, u16 => i16, u32 => i32, u64 => i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacities_follow_width() {
        assert_eq!(<u8 as Word>::DEC_CAPACITY, 3);
        assert_eq!(<u8 as Word>::HEX_CAPACITY, 2);
        assert_eq!(<u16 as Word>::DEC_CAPACITY, 5);
        assert_eq!(<u16 as Word>::HEX_CAPACITY, 4);
        assert_eq!(<u32 as Word>::DEC_CAPACITY, 10);
        assert_eq!(<u32 as Word>::HEX_CAPACITY, 8);
        assert_eq!(<u64 as Word>::DEC_CAPACITY, 20);
        assert_eq!(<u64 as Word>::HEX_CAPACITY, 16);
    }

    #[test]
    fn scratch_buffers_match_capacities() {
        assert_eq!(<<u16 as Word>::DecDigits as Default>::default().as_ref().len(), 5);
        assert_eq!(<<u16 as Word>::HexDigits as Default>::default().as_ref().len(), 4);
        assert_eq!(<<u64 as Word>::DecDigits as Default>::default().as_ref().len(), 20);
        assert_eq!(<<u64 as Word>::HexDigits as Default>::default().as_ref().len(), 16);
    }

    #[test]
    fn decimal_capacity_edges() {
        assert_eq!(decimal_capacity(0), 1);
        assert_eq!(decimal_capacity(9), 1);
        assert_eq!(decimal_capacity(10), 2);
        assert_eq!(decimal_capacity(99_999), 5);
        assert_eq!(decimal_capacity(100_000), 6);
    }

    #[test]
    fn sign_magnitude_handles_most_negative() {
        assert_eq!(u16::sign_magnitude(-5), (true, 5));
        assert_eq!(u16::sign_magnitude(0), (false, 0));
        assert_eq!(u16::sign_magnitude(i16::MAX), (false, 32767));
        assert_eq!(u16::sign_magnitude(i16::MIN), (true, 32768));
        assert_eq!(u8::sign_magnitude(i8::MIN), (true, 128));
        assert_eq!(u64::sign_magnitude(i64::MIN), (true, 1 << 63));
    }
}
