//! Typed argument list consumed by the scanner.
//!
//! Each conversion specifier takes exactly one argument, in order. The
//! variant is checked before dispatch, so a `%d` never reinterprets the bits
//! of a string reference the way a C `va_arg` would.

use core::fmt;

use crate::word::{DefaultWord, Word};

/// One formatting argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a, W: Word = DefaultWord> {
    /// Consumed by `%x` and `%u`.
    Unsigned(W),
    /// Consumed by `%d`.
    Signed(W::Signed),
    /// Consumed by `%s`. `None` stands for a null string reference.
    ///
    /// The content ends at the first NUL byte, or at the end of the slice.
    Str(Option<&'a [u8]>),
}

impl<W: Word> Arg<'_, W> {
    /// Variant tag, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> ArgKind {
        match self {
            Self::Unsigned(_) => ArgKind::Unsigned,
            Self::Signed(_) => ArgKind::Signed,
            Self::Str(_) => ArgKind::Str,
        }
    }
}

impl<'a, W: Word> From<&'a [u8]> for Arg<'a, W> {
    fn from(value: &'a [u8]) -> Self {
        Arg::Str(Some(value))
    }
}

impl<'a, W: Word> From<&'a str> for Arg<'a, W> {
    fn from(value: &'a str) -> Self {
        Arg::Str(Some(value.as_bytes()))
    }
}

impl<'a, W: Word> From<Option<&'a [u8]>> for Arg<'a, W> {
    fn from(value: Option<&'a [u8]>) -> Self {
        Arg::Str(value)
    }
}

impl<'a, W: Word> From<Option<&'a str>> for Arg<'a, W> {
    fn from(value: Option<&'a str>) -> Self {
        Arg::Str(value.map(str::as_bytes))
    }
}

/// Which kind of argument a directive expects or received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Unsigned,
    Signed,
    Str,
}

impl ArgKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unsigned => "unsigned",
            Self::Signed => "signed",
            Self::Str => "string",
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bytes of a string argument up to, not including, the first NUL.
#[must_use]
pub fn c_str(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_right_variant() {
        let a: Arg<'_, u16> = Arg::from(7u16);
        assert_eq!(a, Arg::Unsigned(7));
        let b: Arg<'_, u16> = Arg::from(-7i16);
        assert_eq!(b, Arg::Signed(-7));
        let c: Arg<'_, u16> = Arg::from("ab");
        assert_eq!(c, Arg::Str(Some(&b"ab"[..])));
        let d: Arg<'_, u16> = Arg::from(None::<&str>);
        assert_eq!(d, Arg::Str(None));
        let e: Arg<'_, u32> = Arg::from(70_000u32);
        assert_eq!(e.kind(), ArgKind::Unsigned);
    }

    #[test]
    fn c_str_stops_at_nul() {
        assert_eq!(c_str(b"abc"), b"abc");
        assert_eq!(c_str(b"ab\0cd"), b"ab");
        assert_eq!(c_str(b"\0"), b"");
        assert_eq!(c_str(b""), b"");
    }

    #[test]
    fn kind_names() {
        assert_eq!(ArgKind::Unsigned.to_string(), "unsigned");
        assert_eq!(ArgKind::Signed.to_string(), "signed");
        assert_eq!(ArgKind::Str.to_string(), "string");
    }
}
