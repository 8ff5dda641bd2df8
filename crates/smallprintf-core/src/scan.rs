//! Format string scanner.
//!
//! Splits a format string into literal runs and `%`-directives without
//! allocating. The format ends at the first NUL byte or at the end of the
//! slice, so C-style terminated buffers and plain Rust slices both work.
//!
//! Directive grammar, after the `%`:
//!
//! ```text
//! directive := ['-'] [digit [digit]] specifier
//! ```
//!
//! Justification and width are reset for every directive.

use core::fmt;

// ---------------------------------------------------------------------------
// Directive types
// ---------------------------------------------------------------------------

/// What a directive's specifier byte selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `x`: uppercase hex, exact digit count.
    Hex,
    /// `d`: signed decimal.
    Signed,
    /// `u`: unsigned decimal.
    Unsigned,
    /// `s`: string with optional padding.
    Str,
    /// `%`: a literal percent sign.
    Percent,
    /// Any other byte; echoed literally.
    Stray(u8),
}

impl Conversion {
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            b'x' => Self::Hex,
            b'd' => Self::Signed,
            b'u' => Self::Unsigned,
            b's' => Self::Str,
            b'%' => Self::Percent,
            other => Self::Stray(other),
        }
    }

    #[must_use]
    pub const fn byte(self) -> u8 {
        match self {
            Self::Hex => b'x',
            Self::Signed => b'd',
            Self::Unsigned => b'u',
            Self::Str => b's',
            Self::Percent => b'%',
            Self::Stray(other) => other,
        }
    }

    /// True when the directive consumes an argument.
    #[must_use]
    pub const fn takes_argument(self) -> bool {
        matches!(self, Self::Hex | Self::Signed | Self::Unsigned | Self::Str)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stray(byte) if !byte.is_ascii_graphic() => write!(f, "%\\x{byte:02X}"),
            other => write!(f, "%{}", other.byte() as char),
        }
    }
}

/// A parsed directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spec {
    /// `-` was present. Only `%s` honours it.
    pub left_justify: bool,
    /// Zero to two decimal digits; 0 when absent.
    pub width: u8,
    pub conversion: Conversion,
}

/// A piece of a scanned format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Bytes to emit verbatim.
    Literal(&'a [u8]),
    Directive(Spec),
    /// The format ended inside a directive (`"abc%"`, `"%-1"`). The
    /// terminator stands in for the specifier and is echoed as a NUL.
    Truncated,
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse one directive starting after the `%`.
///
/// Returns `(spec, bytes_consumed)`, or `None` if `fmt` runs out before the
/// specifier byte.
#[must_use]
pub fn parse_directive(fmt: &[u8]) -> Option<(Spec, usize)> {
    let mut pos = 0;

    let left_justify = fmt.first() == Some(&b'-');
    if left_justify {
        pos += 1;
    }

    let mut width = 0u8;
    for _ in 0..2 {
        match fmt.get(pos) {
            Some(&d) if d.is_ascii_digit() => {
                width = width * 10 + (d - b'0');
                pos += 1;
            }
            _ => break,
        }
    }

    let specifier = *fmt.get(pos)?;
    Some((
        Spec {
            left_justify,
            width,
            conversion: Conversion::from_byte(specifier),
        },
        pos + 1,
    ))
}

/// Iterator over the [`Piece`]s of a format string.
#[derive(Debug, Clone)]
pub struct Pieces<'a> {
    fmt: &'a [u8],
    pos: usize,
}

impl<'a> Pieces<'a> {
    #[must_use]
    pub fn new(fmt: &'a [u8]) -> Self {
        Self {
            fmt: crate::arg::c_str(fmt),
            pos: 0,
        }
    }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        let fmt = self.fmt;
        let len = fmt.len();
        if self.pos >= len {
            return None;
        }

        if fmt[self.pos] != b'%' {
            let start = self.pos;
            while self.pos < len && fmt[self.pos] != b'%' {
                self.pos += 1;
            }
            return Some(Piece::Literal(&fmt[start..self.pos]));
        }

        // Skip the '%'.
        self.pos += 1;
        match parse_directive(&fmt[self.pos..]) {
            Some((spec, consumed)) => {
                self.pos += consumed;
                Some(Piece::Directive(spec))
            }
            None => {
                self.pos = len;
                Some(Piece::Truncated)
            }
        }
    }
}

impl core::iter::FusedIterator for Pieces<'_> {}
